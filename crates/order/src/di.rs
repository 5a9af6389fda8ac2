use crate::{
    abstract_trait::{
        DynClock,
        order::service::{DynOrderCommandService, DynOrderQueryService},
    },
    config::menu::MenuCatalog,
    repository::order::{OrderCommandRepository, OrderQueryRepository},
    service::order::{OrderCommandService, OrderCommandServiceDeps, OrderQueryService},
};
use std::{fmt, path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_query", &"OrderQueryService")
            .field("order_command", &"OrderCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub order_file: PathBuf,
    pub menu: MenuCatalog,
    pub clock: DynClock,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            order_file,
            menu,
            clock,
        } = deps;

        let menu = Arc::new(menu);

        let order_query_repo = Arc::new(OrderQueryRepository::new(order_file.clone()));
        let order_command_repo = Arc::new(OrderCommandRepository::new(order_file));

        let order_query: DynOrderQueryService =
            Arc::new(OrderQueryService::new(order_query_repo.clone(), menu.clone()));

        let order_command: DynOrderCommandService =
            Arc::new(OrderCommandService::new(OrderCommandServiceDeps {
                query: order_query_repo,
                command: order_command_repo,
                menu,
                clock,
            }));

        Self {
            order_query,
            order_command,
        }
    }
}
