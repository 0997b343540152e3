//! Bootstrap: make the widget library available, then bind pickers.
//!
//! Loading is the one asynchronous step. All resources are requested
//! together and resolve to a single ready-or-failed result; nothing is bound
//! until every resource has loaded.

use std::time::Duration;

use async_trait::async_trait;
use fieldpicker_config::PickerConfig;
use futures::future::try_join_all;
use tracing::{debug, error, info};

use crate::discovery::render_pickers;
use crate::error::{PickerError, Result};
use crate::host::{FormDocument, HostServices, PickerFactory};
use crate::session::PickerSession;

/// Fetches one named resource the widget library needs.
#[async_trait]
pub trait DependencyLoader {
    /// Load `resource`, returning a description of the failure if it did not load.
    async fn load(&self, resource: &str) -> std::result::Result<(), String>;
}

/// Wait until every resource has loaded.
///
/// Fails with the first resource that failed, or with a timeout when the
/// whole set is not ready within `timeout`.
pub async fn ensure_dependencies<L>(loader: &L, resources: &[String], timeout: Duration) -> Result<()>
where
    L: DependencyLoader + ?Sized,
{
    let loads = resources.iter().map(|resource| async move {
        debug!(resource = %resource, "loading picker dependency");
        loader
            .load(resource)
            .await
            .map_err(|message| PickerError::DependencyLoad {
                resource: resource.clone(),
                message,
            })
    });

    match tokio::time::timeout(timeout, try_join_all(loads)).await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => Err(e),
        Err(_) => Err(PickerError::DependencyTimeout {
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }),
    }
}

/// Load the widget library and bind a picker to every configured field.
///
/// If loading fails no picker is bound and every field stays a plain text
/// input; the failure is logged and returned.
pub async fn install<L, D, Fa>(
    config: &PickerConfig,
    loader: &L,
    doc: &mut D,
    factory: &mut Fa,
    host: &HostServices,
) -> Result<PickerSession<D::Field, Fa::Widget>>
where
    L: DependencyLoader + ?Sized,
    D: FormDocument,
    Fa: PickerFactory,
{
    let targets = config.targets()?;
    let resources = config.resource_urls();

    if let Err(e) = ensure_dependencies(loader, &resources, config.load_timeout()).await {
        error!(error = %e, "loading picker dependencies failed");
        return Err(e);
    }
    info!(resources = resources.len(), "picker dependencies loaded");

    let session = render_pickers(
        doc,
        factory,
        &targets,
        &config.schema,
        host,
        config.indicator_color.as_deref(),
    );
    info!(bound = session.len(), "pickers ready");
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records requests; fails any resource named in `failing`.
    struct ScriptLoader {
        failing: Vec<&'static str>,
        requested: Mutex<Vec<String>>,
    }

    impl ScriptLoader {
        fn new(failing: Vec<&'static str>) -> Self {
            Self {
                failing,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DependencyLoader for ScriptLoader {
        async fn load(&self, resource: &str) -> std::result::Result<(), String> {
            self.requested.lock().unwrap().push(resource.to_string());
            if self.failing.iter().any(|f| *f == resource) {
                Err("404 Not Found".to_string())
            } else {
                Ok(())
            }
        }
    }

    struct NeverLoads;

    #[async_trait]
    impl DependencyLoader for NeverLoads {
        async fn load(&self, _resource: &str) -> std::result::Result<(), String> {
            std::future::pending::<()>().await;
            Ok(())
        }
    }

    fn resources(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[tokio::test]
    async fn loads_every_resource() {
        let loader = ScriptLoader::new(vec![]);
        let names = resources(&["clienttemplates.js", "clientforms.js"]);
        ensure_dependencies(&loader, &names, Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(loader.requested.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn reports_failing_resource() {
        let loader = ScriptLoader::new(vec!["autofill.js"]);
        let names = resources(&["clientforms.js", "autofill.js"]);
        let err = ensure_dependencies(&loader, &names, Duration::from_secs(1))
            .await
            .unwrap_err();
        match err {
            PickerError::DependencyLoad { resource, message } => {
                assert_eq!(resource, "autofill.js");
                assert_eq!(message, "404 Not Found");
            }
            other => panic!("expected DependencyLoad, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_resource_list_is_ready() {
        let loader = ScriptLoader::new(vec![]);
        ensure_dependencies(&loader, &[], Duration::from_millis(10))
            .await
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_when_never_ready() {
        let names = resources(&["clientpeoplepicker.js"]);
        let err = ensure_dependencies(&NeverLoads, &names, Duration::from_millis(250))
            .await
            .unwrap_err();
        assert!(matches!(err, PickerError::DependencyTimeout { timeout_ms: 250 }));
    }
}
