use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;
use sea_orm::DatabaseConnection;
use std::future::{Ready, ready};
use std::rc::Rc;
use std::sync::Arc;
use tracing::warn;

use crate::db::visitor_logs;
use crate::tracking::geo::GeoResolver;
use crate::tracking::{VisitMeta, agent, is_private_ip, should_track};

/// Shared state for the visitor recorder: a db handle and the geolocation
/// cache.
pub struct TrackingContext {
    pub db: DatabaseConnection,
    pub geo: GeoResolver,
}

/// Actix middleware that records visitor analytics for public page
/// requests. The log row is written on a spawned task after the response
/// has been handed back, so tracking never adds user-facing latency and
/// tracking failures never surface.
pub struct VisitorTracking {
    ctx: Arc<TrackingContext>,
}

impl VisitorTracking {
    pub fn new(ctx: Arc<TrackingContext>) -> Self {
        Self { ctx }
    }
}

impl<S, B> Transform<S, ServiceRequest> for VisitorTracking
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = VisitorTrackingMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(VisitorTrackingMiddleware {
            service: Rc::new(service),
            ctx: self.ctx.clone(),
        }))
    }
}

pub struct VisitorTrackingMiddleware<S> {
    service: Rc<S>,
    ctx: Arc<TrackingContext>,
}

impl<S, B> Service<ServiceRequest> for VisitorTrackingMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let visit = should_track(req.path()).then(|| VisitMeta::from_request(&req));
        let ctx = self.ctx.clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;

            if let Some(meta) = visit {
                tokio::spawn(async move {
                    record_visit(&ctx, meta).await;
                });
            }

            Ok(res)
        })
    }
}

/// Resolve geolocation (skipped for private IPs) and persist the log row.
/// Every failure here is a warning, never an error the visitor sees.
async fn record_visit(ctx: &TrackingContext, meta: VisitMeta) {
    let agent = agent::parse(meta.user_agent.as_deref());

    let geo = match meta.ip.parse() {
        Ok(ip) if !is_private_ip(&ip) => match ctx.geo.resolve(&meta.ip).await {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("Geolocation lookup for {} failed: {e}", meta.ip);
                None
            }
        },
        Ok(_) => None,
        Err(_) => {
            warn!("Unparseable client IP {:?}, logging without geo", meta.ip);
            None
        }
    };

    if let Err(e) = visitor_logs::insert_log(&ctx.db, &meta, &agent, geo.as_ref()).await {
        warn!("Failed to persist visitor log for {}: {e}", meta.url);
    }
}
