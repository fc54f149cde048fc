//! Caller-owned registry of normalization hooks.

use std::fmt;

use crate::types::{UrlParts, UrlPatch};

type PreParseFn = Box<dyn Fn(&str) -> String + Send + Sync>;
type PostParseFn = Box<dyn Fn(&UrlParts) -> UrlPatch + Send + Sync>;

/// Ordered lists of rewrite hooks threaded through normalization.
///
/// Pre-parse hooks rewrite the whole URL text before structural splitting;
/// post-parse hooks inspect the normalized parts and return a patch that is
/// merged into them before joining. Hooks run in registration order.
///
/// The registry is owned by the caller and borrowed immutably during
/// normalization, so registration cannot race a running call; populate it
/// once, then share it freely.
///
/// # Examples
///
/// ```
/// use urlnorm::{normalize_with, Registry, UrlPatch};
///
/// let mut registry = Registry::new();
/// registry.register_post(|parts| UrlPatch {
///     path: Some(format!("{}ath", parts.path)),
///     ..UrlPatch::default()
/// });
///
/// assert_eq!(normalize_with("http://d/p", None, &registry), "http://d/path");
/// ```
#[derive(Default)]
pub struct Registry {
    pre: Vec<PreParseFn>,
    post: Vec<PostParseFn>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pre-parse hook, run after whitespace stripping and before
    /// percent-encoding normalization.
    pub fn register_pre<F>(&mut self, hook: F)
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.pre.push(Box::new(hook));
    }

    /// Append a post-parse hook, run after all field normalization and
    /// before joining.
    pub fn register_post<F>(&mut self, hook: F)
    where
        F: Fn(&UrlParts) -> UrlPatch + Send + Sync + 'static,
    {
        self.post.push(Box::new(hook));
    }

    /// Number of registered pre-parse hooks.
    pub fn pre_len(&self) -> usize {
        self.pre.len()
    }

    /// Number of registered post-parse hooks.
    pub fn post_len(&self) -> usize {
        self.post.len()
    }

    /// Thread the URL text through every pre-parse hook in order.
    pub(crate) fn run_pre(&self, url: String) -> String {
        self.pre.iter().fold(url, |url, hook| hook(&url))
    }

    /// Run every post-parse hook in order, merging each returned patch into
    /// the running parts.
    pub(crate) fn run_post(&self, parts: &mut UrlParts) {
        for hook in &self.post {
            let patch = hook(parts);
            parts.apply(patch);
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("pre", &self.pre.len())
            .field("post", &self.post.len())
            .finish()
    }
}
