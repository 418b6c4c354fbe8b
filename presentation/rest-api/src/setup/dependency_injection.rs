use std::sync::Arc;
use std::time::Duration;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    /// Wires the PostgreSQL-backed store. The pool is handed to the
    /// repository and to nothing else.
    pub fn new(pool: sqlx::PgPool, query_timeout: Duration) -> Self {
        let product_repository = Arc::new(ProductRepositoryPostgres::with_query_timeout(
            pool,
            query_timeout,
        ));

        Self::with_repository(product_repository, Arc::new(TracingLogger))
    }

    pub fn with_repository(
        product_repository: Arc<dyn ProductRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let health_api = crate::api::health::routes::Api::new();

        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api,
            product_api,
        }
    }
}
