use crate::{
    abstract_trait::DynClock,
    clock::SystemClock,
    config::myconfig::Config,
    di::{DependenciesInject, DependenciesInjectDeps},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub config: Config,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("order_file", &self.config.order_file)
            .finish()
    }
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: DynClock) -> Self {
        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            order_file: config.order_file.clone(),
            menu: config.menu.clone(),
            clock,
        });

        Self {
            di_container,
            config,
        }
    }
}
