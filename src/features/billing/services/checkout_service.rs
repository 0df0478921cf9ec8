use axum::http::HeaderValue;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::features::billing::models::CheckoutSession;
use crate::modules::rpc::RemoteProcedures;
use crate::shared::toast::Toast;

/// Result of one checkout attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Navigate the whole page to the provider
    Redirect { url: String },
    /// Stay on the page and show the notification
    Failed { toast: Toast },
    /// A checkout request was already in flight; nothing was sent
    AlreadyPending,
}

/// Starts checkout / billing-portal sessions, one request at a time
pub struct CheckoutService {
    remote: Arc<dyn RemoteProcedures>,
    pending: Arc<AtomicBool>,
}

impl CheckoutService {
    pub fn new(remote: Arc<dyn RemoteProcedures>) -> Self {
        Self {
            remote,
            pending: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Request a checkout session and decide where the page goes next.
    ///
    /// Errors and a missing URL both end in the same destructive toast. There
    /// is no automatic retry.
    pub async fn initiate_checkout(&self) -> CheckoutOutcome {
        let Some(_pending) = PendingGuard::acquire(&self.pending) else {
            info!("Checkout already in flight, ignoring repeated submit");
            return CheckoutOutcome::AlreadyPending;
        };

        match self.remote.create_checkout_session().await {
            Ok(CheckoutSession { url: Some(url) }) if is_redirect_target(&url) => {
                info!("Checkout session created, redirecting");
                CheckoutOutcome::Redirect { url }
            }
            Ok(_) => {
                warn!("Checkout session created without a usable URL");
                CheckoutOutcome::Failed {
                    toast: Toast::checkout_failed(),
                }
            }
            Err(e) => {
                error!("Failed to create checkout session: {}", e);
                CheckoutOutcome::Failed {
                    toast: Toast::checkout_failed(),
                }
            }
        }
    }
}

/// The URL must be non-empty and fit in a `Location` header
fn is_redirect_target(url: &str) -> bool {
    !url.is_empty() && HeaderValue::from_str(url).is_ok()
}

/// Holds the pending flag for the lifetime of one request
struct PendingGuard {
    flag: Arc<AtomicBool>,
}

impl PendingGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                flag: Arc::clone(flag),
            })
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
