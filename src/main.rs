mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let storage = startup::setup_storage(&config).await?;
        let cors = startup::setup_cors(&config)?;

        tracing::info!(
            "Starting server with image storage at {}",
            storage.root().display()
        );

        let mut router = dioxus::server::router(App);
        let mut server_routes = server::router::router(storage.root())
            .with_state(AppState::new(db, storage));
        if let Some(cors) = cors {
            server_routes = server_routes.layer(cors);
        }
        router = router.merge(server_routes);

        Ok(router)
    })
}
