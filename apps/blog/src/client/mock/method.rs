//! A single configurable, call-recording test double.
//!
//! Resolutions are answered in this order:
//! 1. queued `*_once` resolutions, first in first out;
//! 2. the persistent resolution set by `mock_resolved_value`,
//!    `mock_rejected_value` or `mock_implementation`;
//! 3. when no persistent resolution exists, the last consumed `*_once`
//!    resolution, repeated.
//!
//! A call with nothing to answer gets the method's default answer when it was
//! built with [`MockMethod::with_default`], and fails with
//! `ClientError::Unconfigured` otherwise.

use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};
use parking_lot::Mutex;
use tracing::debug;

use crate::error::ClientError;

type Implementation<A, T> = Arc<dyn Fn(A) -> BoxFuture<'static, Result<T, ClientError>> + Send + Sync>;

enum Resolution<A, T> {
    Value(T),
    Error(ClientError),
    Implementation(Implementation<A, T>),
}

impl<A, T: Clone> Clone for Resolution<A, T> {
    fn clone(&self) -> Self {
        match self {
            Resolution::Value(v) => Resolution::Value(v.clone()),
            Resolution::Error(e) => Resolution::Error(e.clone()),
            Resolution::Implementation(f) => Resolution::Implementation(Arc::clone(f)),
        }
    }
}

struct MethodState<A, T> {
    once: VecDeque<Resolution<A, T>>,
    fallback: Option<Resolution<A, T>>,
    last_once: Option<Resolution<A, T>>,
    calls: Vec<A>,
}

impl<A, T: Clone> MethodState<A, T> {
    fn next_resolution(&mut self) -> Option<Resolution<A, T>> {
        match self.once.pop_front() {
            Some(resolution) => {
                self.last_once = Some(resolution.clone());
                Some(resolution)
            }
            None => self.fallback.clone().or_else(|| self.last_once.clone()),
        }
    }
}

/// Double for one client method taking `A` and answering `T`.
pub struct MockMethod<A, T> {
    name: &'static str,
    unconfigured: Option<fn() -> T>,
    state: Mutex<MethodState<A, T>>,
}

impl<A, T> fmt::Debug for MockMethod<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("MockMethod")
            .field("name", &self.name)
            .field("queued", &state.once.len())
            .field("configured", &state.fallback.is_some())
            .field("has_default", &self.unconfigured.is_some())
            .field("calls", &state.calls.len())
            .finish()
    }
}

impl<A, T> MockMethod<A, T>
where
    A: Clone + Send + 'static,
    T: Clone + Send + 'static,
{
    /// A strict double: calls with nothing configured fail.
    pub fn new(name: &'static str) -> Self {
        Self::build(name, None)
    }

    fn build(name: &'static str, unconfigured: Option<fn() -> T>) -> Self {
        Self {
            name,
            unconfigured,
            state: Mutex::new(MethodState {
                once: VecDeque::new(),
                fallback: None,
                last_once: None,
                calls: Vec::new(),
            }),
        }
    }

    fn set_fallback(&self, resolution: Resolution<A, T>) -> &Self {
        self.state.lock().fallback = Some(resolution);
        self
    }

    fn push_once(&self, resolution: Resolution<A, T>) -> &Self {
        self.state.lock().once.push_back(resolution);
        self
    }

    /// Answer every call with `value`.
    pub fn mock_resolved_value(&self, value: T) -> &Self {
        self.set_fallback(Resolution::Value(value))
    }

    /// Answer the next unanswered call with `value`.
    pub fn mock_resolved_value_once(&self, value: T) -> &Self {
        self.push_once(Resolution::Value(value))
    }

    pub fn mock_rejected_value(&self, err: ClientError) -> &Self {
        self.set_fallback(Resolution::Error(err))
    }

    pub fn mock_rejected_value_once(&self, err: ClientError) -> &Self {
        self.push_once(Resolution::Error(err))
    }

    /// Answer every call by running `f` on the call's arguments.
    pub fn mock_implementation<F>(&self, f: F) -> &Self
    where
        F: Fn(A) -> Result<T, ClientError> + Send + Sync + 'static,
    {
        self.set_fallback(Resolution::Implementation(Arc::new(move |args| {
            future::ready(f(args)).boxed()
        })))
    }

    pub fn mock_implementation_once<F>(&self, f: F) -> &Self
    where
        F: Fn(A) -> Result<T, ClientError> + Send + Sync + 'static,
    {
        self.push_once(Resolution::Implementation(Arc::new(move |args| {
            future::ready(f(args)).boxed()
        })))
    }

    /// Answer every call by awaiting the future `f` builds from the arguments.
    pub fn mock_async_implementation<F, Fut>(&self, f: F) -> &Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ClientError>> + Send + 'static,
    {
        self.set_fallback(Resolution::Implementation(Arc::new(move |args| {
            f(args).boxed()
        })))
    }

    /// Record the call and produce its configured answer.
    pub async fn invoke(&self, args: A) -> Result<T, ClientError> {
        let resolution = {
            let mut state = self.state.lock();
            state.calls.push(args.clone());
            state.next_resolution()
        };

        debug!(method = self.name, "mock method invoked");

        match resolution {
            Some(Resolution::Value(value)) => Ok(value),
            Some(Resolution::Error(err)) => Err(err),
            Some(Resolution::Implementation(f)) => f(args).await,
            None => match self.unconfigured {
                Some(default) => Ok(default()),
                None => Err(ClientError::Unconfigured { method: self.name }),
            },
        }
    }

    pub fn was_called(&self) -> bool {
        !self.state.lock().calls.is_empty()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().calls.len()
    }

    /// Arguments of every call so far, oldest first.
    pub fn calls(&self) -> Vec<A> {
        self.state.lock().calls.clone()
    }

    pub fn last_call(&self) -> Option<A> {
        self.state.lock().calls.last().cloned()
    }

    /// Forget all configuration and recorded calls.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.once.clear();
        state.fallback = None;
        state.last_once = None;
        state.calls.clear();
    }
}

impl<A, T> MockMethod<A, T>
where
    A: Clone + Send + 'static,
    T: Clone + Default + Send + 'static,
{
    /// A lenient double: calls with nothing configured answer `T::default()`.
    pub fn with_default(name: &'static str) -> Self {
        Self::build(name, Some(T::default as fn() -> T))
    }
}

impl<A, T> MockMethod<A, T>
where
    A: Clone + PartialEq + Send + 'static,
    T: Clone + Send + 'static,
{
    /// True if any recorded call had exactly these arguments.
    pub fn was_called_with(&self, args: &A) -> bool {
        self.state.lock().calls.iter().any(|call| call == args)
    }
}
