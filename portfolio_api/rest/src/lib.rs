use std::net::IpAddr;

use axum::Router;
use portfolio_core_contact_contracts::ContactFeatureService;
use portfolio_core_profile_contracts::ProfileFeatureService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact, Profile> {
    contact: Contact,
    profile: Profile,
}

impl<Contact, Profile> RestServer<Contact, Profile>
where
    Contact: ContactFeatureService,
    Profile: ProfileFeatureService,
{
    pub fn new(contact: Contact, profile: Profile) -> Self {
        Self { contact, profile }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::profile::router(self.profile.into()))
            .fallback(routes::not_found);

        // Outermost layer last: the request id must exist before the trace
        // span is created.
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
