//! Fake wallet providers shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use lib_wallet::{ProviderError, ProviderLocator, WalletProvider};

/// Call counters shared between a fake provider and the test body.
#[derive(Clone, Debug, Default)]
pub struct Calls {
    pub lookups: Rc<Cell<usize>>,
    pub connects: Rc<Cell<usize>>,
}

impl Calls {
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    pub fn connects(&self) -> usize {
        self.connects.get()
    }
}

/// Provider with scripted answers for the passive and interactive paths.
#[derive(Clone, Debug)]
pub struct FakeProvider {
    /// Detection number assigned by [`FakeLocator`]; 0 until detected.
    pub id: usize,
    pub selected: Result<Option<String>, ProviderError>,
    pub approved: Result<Option<String>, ProviderError>,
    pub calls: Calls,
}

impl FakeProvider {
    pub fn new(selected: Option<&str>, approved: Option<&str>) -> Self {
        Self {
            id: 0,
            selected: Ok(selected.map(str::to_string)),
            approved: Ok(approved.map(str::to_string)),
            calls: Calls::default(),
        }
    }

    pub fn rejecting_connect(selected: Option<&str>, msg: &str) -> Self {
        Self {
            approved: Err(ProviderError::Rejected(msg.to_string())),
            ..Self::new(selected, None)
        }
    }
}

#[async_trait(?Send)]
impl WalletProvider for FakeProvider {
    async fn most_recently_selected_account(&self) -> Result<Option<String>, ProviderError> {
        self.calls.lookups.set(self.calls.lookups.get() + 1);
        self.selected.clone()
    }

    async fn connect(&self) -> Result<Option<String>, ProviderError> {
        self.calls.connects.set(self.calls.connects.get() + 1);
        self.approved.clone()
    }
}

/// Locator that hands out numbered clones of a fixed provider, or fails detection.
pub struct FakeLocator {
    pub provider: Result<FakeProvider, ProviderError>,
    pub detections: Rc<Cell<usize>>,
}

impl FakeLocator {
    pub fn new(provider: FakeProvider) -> Self {
        Self {
            provider: Ok(provider),
            detections: Rc::default(),
        }
    }

    pub fn missing(msg: &str) -> Self {
        Self {
            provider: Err(ProviderError::NotDetected(msg.to_string())),
            detections: Rc::default(),
        }
    }
}

#[async_trait(?Send)]
impl ProviderLocator for FakeLocator {
    type Provider = FakeProvider;

    async fn detect(&self) -> Result<FakeProvider, ProviderError> {
        self.detections.set(self.detections.get() + 1);
        let mut provider = self.provider.clone()?;
        provider.id = self.detections.get();
        Ok(provider)
    }
}

/// Locator whose first detection waits until the test opens the gate.
pub struct GatedLocator {
    provider: FakeProvider,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl GatedLocator {
    pub fn new(provider: FakeProvider) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        let locator = Self {
            provider,
            gate: RefCell::new(Some(rx)),
        };
        (locator, tx)
    }
}

#[async_trait(?Send)]
impl ProviderLocator for GatedLocator {
    type Provider = FakeProvider;

    async fn detect(&self) -> Result<FakeProvider, ProviderError> {
        let gate = self.gate.borrow_mut().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        Ok(self.provider.clone())
    }
}
