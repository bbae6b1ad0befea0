//! Session-scoped state: run configuration, readiness, and run identity.

use derive_builder::Builder;
use derive_getters::Getters;
use lumina_core::{
    AnalyzedStyle, DEFAULT_STYLE_ID, ExportFormat, ImageSize, Language, ModelTier,
    PresentationFormat, StylePreset, VisualTheme,
};
use lumina_error::LuminaError;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Everything the pipeline needs to know about one generation run.
///
/// Immutable once the run starts; a restart builds a fresh session.
///
/// # Examples
///
/// ```
/// use lumina_core::ExportFormat;
/// use lumina_deck::GenerationSession;
///
/// let session = GenerationSession::builder()
///     .topic("Container shipping in 2030")
///     .export_format(ExportFormat::Pdf)
///     .slide_count(5usize)
///     .build()
///     .unwrap();
/// assert_eq!(session.slide_count(), &5);
/// assert!(session.theme().id.contains("corporate"));
/// ```
#[derive(Debug, Clone, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerationSession {
    /// Presentation topic entered by the user
    topic: String,
    /// Assembled source-document context, possibly empty
    #[builder(default)]
    doc_context: String,
    /// Requested slide count
    #[builder(default = "8")]
    slide_count: usize,
    /// Output language
    #[builder(default)]
    language: Language,
    /// Text density mode
    #[builder(default)]
    presentation_format: PresentationFormat,
    /// Export medium, which drives the pipeline branch
    #[builder(default)]
    export_format: ExportFormat,
    /// Model quality tier
    #[builder(default)]
    tier: ModelTier,
    /// Resolution for user-requested image synthesis
    #[builder(default)]
    image_size: ImageSize,
    /// Style analysis feeding the planning and content prompts
    #[builder(default = "default_style()")]
    style: AnalyzedStyle,
    /// Optional reference image (data URI) for style transfer
    #[builder(default, setter(strip_option))]
    style_reference: Option<String>,
    /// Theme applied at render time
    #[builder(default = "default_theme()")]
    theme: VisualTheme,
}

impl GenerationSession {
    /// Create a builder with the catalog's default style and theme.
    pub fn builder() -> GenerationSessionBuilder {
        GenerationSessionBuilder::default()
    }
}

fn default_style() -> AnalyzedStyle {
    AnalyzedStyle::fallback(StylePreset::by_id_or_default(DEFAULT_STYLE_ID).description)
}

fn default_theme() -> VisualTheme {
    StylePreset::by_id_or_default(DEFAULT_STYLE_ID).theme
}

/// A named document contributing to the generation context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Display name, usually the uploaded file name
    pub name: String,
    /// Extracted text content
    pub content: String,
}

/// Join pasted text and uploaded documents into one labelled context block.
///
/// Pasted text comes first under a `[Pasted Text]` header, then each document
/// under `[File: {name}]`, all separated by blank lines. Whitespace-only
/// pasted text contributes nothing.
///
/// # Examples
///
/// ```
/// use lumina_deck::{SourceDocument, assemble_doc_context};
///
/// let docs = vec![SourceDocument {
///     name: "q3.txt".to_string(),
///     content: "Revenue grew 12%.".to_string(),
/// }];
/// let context = assemble_doc_context("Focus on Asia.", &docs);
/// assert!(context.starts_with("[Pasted Text]\nFocus on Asia."));
/// assert!(context.contains("[File: q3.txt]\nRevenue grew 12%."));
/// ```
pub fn assemble_doc_context(pasted_text: &str, documents: &[SourceDocument]) -> String {
    let mut sections = Vec::new();
    if !pasted_text.trim().is_empty() {
        sections.push(format!("[Pasted Text]\n{pasted_text}"));
    }
    for doc in documents {
        sections.push(format!("[File: {}]\n{}", doc.name, doc.content));
    }
    sections.join("\n\n")
}

/// Monotone run counter shared between the session and in-flight pipelines.
///
/// Advancing the epoch orphans every guard taken before the advance, which
/// is how a restart silences late results from a superseded run.
#[derive(Debug, Clone, Default)]
pub struct GenerationEpoch {
    counter: Arc<AtomicU64>,
}

impl GenerationEpoch {
    /// The current epoch value.
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::Acquire)
    }

    /// Advance to a new epoch, orphaning existing guards. Returns the new
    /// value.
    pub fn advance(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Capture a guard pinned to the current epoch.
    pub fn guard(&self) -> EpochGuard {
        EpochGuard {
            seen: self.current(),
            epoch: self.clone(),
        }
    }
}

/// A pipeline's claim on the epoch it was started under.
#[derive(Debug, Clone)]
pub struct EpochGuard {
    seen: u64,
    epoch: GenerationEpoch,
}

impl EpochGuard {
    /// True while no restart has happened since this guard was taken.
    pub fn is_current(&self) -> bool {
        self.seen == self.epoch.current()
    }

    /// The epoch this guard was taken under.
    pub fn seen(&self) -> u64 {
        self.seen
    }

    /// The epoch the session is on now.
    pub fn latest(&self) -> u64 {
        self.epoch.current()
    }
}

/// Mutable per-session state outside any single run.
///
/// `ready` gates generation on credential selection and is revoked when a
/// backend reports an authorization failure, pushing the user back through
/// credential selection.
#[derive(Debug, Clone, Default, Getters)]
pub struct SessionState {
    /// True once credentials are selected and not yet rejected
    ready: bool,
    /// Run identity counter
    #[getter(skip)]
    epoch: GenerationEpoch,
}

impl SessionState {
    /// Fresh state: not ready, epoch zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark credentials as selected.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    /// Revoke readiness, forcing re-selection of credentials.
    pub fn revoke_ready(&mut self) {
        self.ready = false;
    }

    /// The shared run counter.
    pub fn epoch(&self) -> &GenerationEpoch {
        &self.epoch
    }

    /// Capture the guard a new pipeline run should carry.
    pub fn begin_run(&self) -> EpochGuard {
        self.epoch.guard()
    }

    /// Abandon in-flight runs and move to a fresh epoch.
    pub fn restart(&mut self) -> u64 {
        self.epoch.advance()
    }

    /// React to a run error. Authorization failures revoke readiness and
    /// return true; everything else leaves the state untouched.
    pub fn note_failure(&mut self, error: &LuminaError) -> bool {
        if error.is_authorization() {
            self.ready = false;
            true
        } else {
            false
        }
    }
}
