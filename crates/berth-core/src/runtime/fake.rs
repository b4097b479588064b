//! Scripted in-memory runtime for provider tests.
use std::{
    io,
    pin::Pin,
    sync::Mutex,
    task::{Context, Poll},
};

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt, ReadBuf};

use super::{
    ContainerRecord, ContainerRuntime, CreateContainer, CreatedContainer, ListFilter, PullStream,
    RemoveOptions,
};
use crate::error::RuntimeError;

const PULL_PROGRESS: &[u8] = br#"{"status":"Downloading"}{"status":"Pull complete"}"#;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Pull(String),
    Create(CreateContainer),
    Remove(String, RemoveOptions),
    List(ListFilter),
}

/// Reader that fails on first poll.
struct Interrupted;

impl AsyncRead for Interrupted {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Poll::Ready(Err(io::Error::new(
            io::ErrorKind::ConnectionReset,
            "pull interrupted",
        )))
    }
}

pub(crate) struct FakeRuntime {
    calls: Mutex<Vec<Call>>,
    pull_error: Option<String>,
    pull_interrupted: bool,
    create_id: String,
    create_error: Option<String>,
    remove_error: Option<String>,
    containers: Vec<ContainerRecord>,
    list_error: Option<String>,
}

impl Default for FakeRuntime {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            pull_error: None,
            pull_interrupted: false,
            create_id: "c0ffee".into(),
            create_error: None,
            remove_error: None,
            containers: Vec::new(),
            list_error: None,
        }
    }
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_pull(mut self, msg: &str) -> Self {
        self.pull_error = Some(msg.into());
        self
    }

    pub fn interrupted_pull(mut self) -> Self {
        self.pull_interrupted = true;
        self
    }

    pub fn creating(mut self, id: &str) -> Self {
        self.create_id = id.into();
        self
    }

    pub fn failing_create(mut self, msg: &str) -> Self {
        self.create_error = Some(msg.into());
        self
    }

    pub fn failing_remove(mut self, msg: &str) -> Self {
        self.remove_error = Some(msg.into());
        self
    }

    pub fn listing(mut self, containers: Vec<ContainerRecord>) -> Self {
        self.containers = containers;
        self
    }

    pub fn failing_list(mut self, msg: &str) -> Self {
        self.list_error = Some(msg.into());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ContainerRuntime for FakeRuntime {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn pull_image(&self, image: &str) -> Result<PullStream, RuntimeError> {
        self.record(Call::Pull(image.to_string()));
        if let Some(msg) = &self.pull_error {
            return Err(RuntimeError::Api(msg.clone()));
        }
        let progress = io::Cursor::new(PULL_PROGRESS.to_vec());
        if self.pull_interrupted {
            Ok(Box::pin(progress.chain(Interrupted)))
        } else {
            Ok(Box::pin(progress))
        }
    }

    async fn create_container(
        &self,
        request: CreateContainer,
    ) -> Result<CreatedContainer, RuntimeError> {
        self.record(Call::Create(request));
        match &self.create_error {
            Some(msg) => Err(RuntimeError::Api(msg.clone())),
            None => Ok(CreatedContainer::new(self.create_id.clone())),
        }
    }

    async fn remove_container(
        &self,
        id: &str,
        options: RemoveOptions,
    ) -> Result<(), RuntimeError> {
        self.record(Call::Remove(id.to_string(), options));
        match &self.remove_error {
            Some(msg) => Err(RuntimeError::NotFound(msg.clone())),
            None => Ok(()),
        }
    }

    async fn list_containers(
        &self,
        filter: &ListFilter,
    ) -> Result<Vec<ContainerRecord>, RuntimeError> {
        self.record(Call::List(filter.clone()));
        match &self.list_error {
            Some(msg) => Err(RuntimeError::Api(msg.clone())),
            None => Ok(self.containers.clone()),
        }
    }
}
