use std::sync::Arc;
use chrono::Utc;
use log::{debug, error, warn};
use crate::content::enums::resource_kind::ResourceKind;
use crate::content::structs::content_index::ContentIndex;
use crate::content::structs::resource_descriptor::ResourceDescriptor;
use crate::executor::enums::execution_error::ExecutionError;
use crate::executor::structs::dynamic_page_executor::DynamicPageExecutor;
use crate::router::router::{display_name, normalize_path, render_listing, DEFAULT_INDEX, INDEX_PATH};
use crate::router::structs::request::Request;
use crate::router::structs::request_router::RequestRouter;
use crate::router::structs::response::Response;
use crate::stats::enums::request_kind::RequestKind;
use crate::stats::structs::request_event::RequestEvent;
use crate::stats::structs::stats_tracker::StatsTracker;

impl RequestRouter {
    pub fn new(index: Arc<ContentIndex>, executor: Arc<DynamicPageExecutor>, stats: Arc<StatsTracker>) -> RequestRouter
    {
        RequestRouter { index, executor, stats }
    }

    /// Answers one request. Never fails; the outcome is always recorded in the stats.
    ///
    /// The work runs in its own task: dropping the returned future leaves a
    /// running page to finish (or time out) and still records the request.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %request.path))]
    pub async fn handle(self: &Arc<Self>, request: Request) -> Response
    {
        let router = self.clone();
        let path = request.path.clone();
        let peer = request.remote_identity.clone();
        let connection_id = request.connection_id.clone();

        match tokio::spawn(async move { router.route(request).await }).await {
            Ok(response) => response,
            Err(join_error) => {
                error!("[ROUTER] Handling of {path} aborted: {join_error}");
                let response = Response::execution_error(&path);
                let kind = RequestKind::of_path(&path);
                self.stats.record_request(RequestEvent {
                    path,
                    peer,
                    connection_id: Some(connection_id),
                    kind,
                    status: response.status,
                    timestamp: Utc::now(),
                });
                response
            }
        }
    }

    /// Resolves and answers a request in the calling task.
    pub async fn route(&self, request: Request) -> Response
    {
        let (path, response) = match normalize_path(&request.path) {
            Some(path) => {
                let response = self.resolve(&path, &request).await;
                (path, response)
            }
            None => {
                debug!("[ROUTER] Rejecting unresolvable path {:?}", request.path);
                (request.path.clone(), Response::not_found(&request.path))
            }
        };

        debug!("[ROUTER] {} {} ({} bytes) for {}", response.status, path, response.body.len(), request.connection_id);
        self.stats.record_request(RequestEvent {
            kind: RequestKind::of_path(&path),
            path,
            peer: request.remote_identity,
            connection_id: Some(request.connection_id),
            status: response.status,
            timestamp: Utc::now(),
        });
        response
    }

    async fn resolve(&self, path: &str, request: &Request) -> Response
    {
        let snapshot = self.index.snapshot();
        let Some(descriptor) = snapshot.lookup(path) else {
            if path == INDEX_PATH {
                return Response::page(DEFAULT_INDEX.as_bytes().to_vec());
            }
            return Response::not_found(path);
        };

        match descriptor.kind {
            ResourceKind::Directory => Response::page(render_listing(&snapshot, &descriptor)),
            ResourceKind::StaticPage => match read_resource(&descriptor).await {
                Some(body) => Response::page(body),
                None => Response::not_found(path),
            },
            ResourceKind::StaticFile => match read_resource(&descriptor).await {
                Some(body) => Response::file(body, file_name(&descriptor)),
                None => Response::not_found(path),
            },
            ResourceKind::DynamicPage => match self.executor.execute(&descriptor, request).await {
                Ok(output) => Response::page(output.stdout),
                Err(ExecutionError::Timeout { .. }) => Response::timeout(path),
                Err(error) => {
                    debug!("[ROUTER] Dynamic page {path} failed: {error}");
                    Response::execution_error(path)
                }
            },
        }
    }
}

/// Reads a static resource. A file removed since the last refresh reads as `None`.
async fn read_resource(descriptor: &ResourceDescriptor) -> Option<Vec<u8>>
{
    match tokio::fs::read(&descriptor.location).await {
        Ok(body) => Some(body),
        Err(error) => {
            warn!("[ROUTER] {} could not be read from {}: {error}", descriptor.logical_path, descriptor.location.display());
            None
        }
    }
}

fn file_name(descriptor: &ResourceDescriptor) -> String
{
    descriptor.location
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| display_name(&descriptor.logical_path).to_string())
}
