use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use fake::faker::filesystem::en::FileName;
use fake::Fake;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

use crate::features::billing::models::{CheckoutSession, SubscriptionPlan};
use crate::features::files::models::File;
use crate::modules::rpc::{RemoteProcedures, RpcError, SubscriptionPlanSource};

pub fn file_at(id: &str, name: &str, created_at: &str) -> File {
    File {
        id: id.to_string(),
        name: name.to_string(),
        created_at: created_at.parse::<DateTime<Utc>>().unwrap(),
    }
}

/// `count` files with random names and creation times, in random order
pub fn fake_files(count: usize) -> Vec<File> {
    let base = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| File {
            id: format!("file-{}", i),
            name: FileName().fake(),
            created_at: base + Duration::minutes((0..1_000_000i64).fake::<i64>()),
        })
        .collect()
}

pub fn free_plan() -> SubscriptionPlan {
    SubscriptionPlan {
        name: "Free".to_string(),
        is_subscribed: false,
        is_canceled: false,
        stripe_current_period_end: None,
    }
}

pub fn pro_plan(is_canceled: bool) -> SubscriptionPlan {
    SubscriptionPlan {
        name: "Pro".to_string(),
        is_subscribed: true,
        is_canceled,
        stripe_current_period_end: Some(Utc.with_ymd_and_hms(2024, 12, 31, 12, 0, 0).unwrap()),
    }
}

/// A held call: signals `started`, then waits for a `release` permit
struct Gate {
    hold: AtomicBool,
    started: Semaphore,
    release: Semaphore,
}

impl Gate {
    fn new() -> Self {
        Self {
            hold: AtomicBool::new(false),
            started: Semaphore::new(0),
            release: Semaphore::new(0),
        }
    }

    async fn pass(&self) {
        if self.hold.load(Ordering::SeqCst) {
            self.started.add_permits(1);
            if let Ok(permit) = self.release.acquire().await {
                permit.forget();
            }
        }
    }

    async fn wait_started(&self) {
        self.started.acquire().await.unwrap().forget();
    }
}

/// In-memory stand-in for the document-chat platform
pub struct FakeRemote {
    files: Mutex<Vec<File>>,
    checkout_url: Mutex<Option<String>>,
    plan: Mutex<SubscriptionPlan>,
    fail_list: AtomicBool,
    fail_delete: AtomicBool,
    fail_checkout: AtomicBool,
    fail_plan: AtomicBool,
    list_calls: AtomicU32,
    delete_calls: AtomicU32,
    checkout_calls: AtomicU32,
    list_gate: Gate,
    delete_gate: Gate,
    checkout_gate: Gate,
}

impl FakeRemote {
    pub fn with_files(files: Vec<File>) -> Arc<Self> {
        Arc::new(Self {
            files: Mutex::new(files),
            checkout_url: Mutex::new(Some("https://pay.example/sess_1".to_string())),
            plan: Mutex::new(free_plan()),
            fail_list: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            fail_checkout: AtomicBool::new(false),
            fail_plan: AtomicBool::new(false),
            list_calls: AtomicU32::new(0),
            delete_calls: AtomicU32::new(0),
            checkout_calls: AtomicU32::new(0),
            list_gate: Gate::new(),
            delete_gate: Gate::new(),
            checkout_gate: Gate::new(),
        })
    }

    pub fn set_checkout_url(&self, url: Option<&str>) {
        *self.checkout_url.lock().unwrap() = url.map(str::to_string);
    }

    pub fn set_plan(&self, plan: SubscriptionPlan) {
        *self.plan.lock().unwrap() = plan;
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn fail_checkout(&self, fail: bool) {
        self.fail_checkout.store(fail, Ordering::SeqCst);
    }

    pub fn fail_plan(&self, fail: bool) {
        self.fail_plan.store(fail, Ordering::SeqCst);
    }

    pub fn hold_lists(&self, hold: bool) {
        self.list_gate.hold.store(hold, Ordering::SeqCst);
    }

    pub fn hold_deletes(&self, hold: bool) {
        self.delete_gate.hold.store(hold, Ordering::SeqCst);
    }

    pub fn hold_checkouts(&self, hold: bool) {
        self.checkout_gate.hold.store(hold, Ordering::SeqCst);
    }

    pub async fn list_started(&self) {
        self.list_gate.wait_started().await;
    }

    pub fn release_list(&self) {
        self.list_gate.release.add_permits(1);
    }

    /// Wait until a held delete has been dispatched
    pub async fn delete_started(&self) {
        self.delete_gate.wait_started().await;
    }

    pub fn release_delete(&self) {
        self.delete_gate.release.add_permits(1);
    }

    pub async fn checkout_started(&self) {
        self.checkout_gate.wait_started().await;
    }

    pub fn release_checkout(&self) {
        self.checkout_gate.release.add_permits(1);
    }

    pub fn list_calls(&self) -> u32 {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> u32 {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn checkout_calls(&self) -> u32 {
        self.checkout_calls.load(Ordering::SeqCst)
    }

    fn unavailable() -> RpcError {
        RpcError::Status {
            status: 500,
            code: Some("INTERNAL_SERVER_ERROR".to_string()),
            message: "Remote unavailable".to_string(),
        }
    }
}

#[async_trait]
impl RemoteProcedures for FakeRemote {
    async fn create_checkout_session(&self) -> Result<CheckoutSession, RpcError> {
        self.checkout_calls.fetch_add(1, Ordering::SeqCst);
        self.checkout_gate.pass().await;
        if self.fail_checkout.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(CheckoutSession {
            url: self.checkout_url.lock().unwrap().clone(),
        })
    }

    async fn list_files(&self) -> Result<Vec<File>, RpcError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_gate.pass().await;
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        // Stored order is deliberately left as-is; callers must sort
        Ok(self.files.lock().unwrap().clone())
    }

    async fn delete_file(&self, id: &str) -> Result<(), RpcError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.delete_gate.pass().await;
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }

        let mut files = self.files.lock().unwrap();
        let before = files.len();
        files.retain(|f| f.id != id);
        if files.len() == before {
            return Err(RpcError::Status {
                status: 404,
                code: Some("NOT_FOUND".to_string()),
                message: "File not found".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SubscriptionPlanSource for FakeRemote {
    async fn get_subscription_plan(&self) -> Result<SubscriptionPlan, RpcError> {
        if self.fail_plan.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(self.plan.lock().unwrap().clone())
    }
}
