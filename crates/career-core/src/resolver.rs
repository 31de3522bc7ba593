//! Ordered fallback search for a 3D asset.
//!
//! An [`AssetResolver`] owns a fixed list of candidate locations and tries
//! them strictly in order against an [`AssetLoader`]. The first success wins;
//! when every candidate fails the caller synthesizes a placeholder so the
//! scene never ends up empty.

use crate::model::ModelError;
use smallvec::SmallVec;
use std::fmt;

/// Capability to fetch and decode one asset from a location.
///
/// Loaders run on a single-threaded executor, so futures need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait AssetLoader {
    type Asset;
    type Error: fmt::Display;

    async fn load(&mut self, location: &str) -> Result<Self::Asset, Self::Error>;
}

/// Failure modes for a single candidate.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request for {location} failed: {reason}")]
    Fetch { location: String, reason: String },
    #[error("{location} returned HTTP {status}")]
    Status { location: String, status: u16 },
    #[error("could not decode {location}: {source}")]
    Decode {
        location: String,
        #[source]
        source: ModelError,
    },
}

/// Outcome of walking the candidate list.
#[derive(Debug)]
pub enum LoadResult<A> {
    Loaded {
        asset: A,
        location: String,
        attempts: usize,
    },
    Exhausted {
        attempts: usize,
    },
}

impl<A> LoadResult<A> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadResult::Loaded { .. })
    }

    pub fn attempts(&self) -> usize {
        match self {
            LoadResult::Loaded { attempts, .. } | LoadResult::Exhausted { attempts } => *attempts,
        }
    }

    pub fn into_asset(self) -> Option<A> {
        match self {
            LoadResult::Loaded { asset, .. } => Some(asset),
            LoadResult::Exhausted { .. } => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AssetResolver {
    label: String,
    candidates: SmallVec<[String; 4]>,
}

impl AssetResolver {
    pub fn new<I, S>(label: impl Into<String>, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Try each candidate in order, stopping at the first success.
    pub async fn resolve<L: AssetLoader>(&self, loader: &mut L) -> LoadResult<L::Asset> {
        let mut attempts = 0usize;
        for location in &self.candidates {
            attempts += 1;
            log::info!("[asset] {}: attempting to load from {}", self.label, location);
            match loader.load(location).await {
                Ok(asset) => {
                    log::info!(
                        "[asset] {}: loaded from {} (attempt {})",
                        self.label,
                        location,
                        attempts
                    );
                    return LoadResult::Loaded {
                        asset,
                        location: location.clone(),
                        attempts,
                    };
                }
                Err(e) => {
                    log::warn!("[asset] {}: failed to load from {}: {}", self.label, location, e);
                }
            }
        }
        log::warn!(
            "[asset] {}: could not load from any of {} path(s), using fallback",
            self.label,
            attempts
        );
        LoadResult::Exhausted { attempts }
    }

    /// Callback form: exactly one of `on_loaded` / `on_fallback` runs, once.
    pub async fn resolve_with<L, T>(
        &self,
        loader: &mut L,
        on_loaded: impl FnOnce(L::Asset) -> T,
        on_fallback: impl FnOnce() -> T,
    ) -> T
    where
        L: AssetLoader,
    {
        match self.resolve(loader).await {
            LoadResult::Loaded { asset, .. } => on_loaded(asset),
            LoadResult::Exhausted { .. } => on_fallback(),
        }
    }

    /// Resolve to an asset, synthesizing one with `fallback` on exhaustion.
    pub async fn resolve_or_else<L>(
        &self,
        loader: &mut L,
        fallback: impl FnOnce() -> L::Asset,
    ) -> L::Asset
    where
        L: AssetLoader,
    {
        self.resolve_with(loader, |asset| asset, fallback).await
    }
}
