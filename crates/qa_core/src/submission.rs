use thiserror::Error;
use url::Url;

use crate::RequestToken;

/// Why a URL was not added to the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CandidateError {
    #[error("Please enter a URL")]
    Empty,
    #[error("Please enter a valid URL")]
    InvalidUrl,
    #[error("This URL has already been added")]
    Duplicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please add at least one URL")]
    NoCandidates,
}

/// Content handed back by a successful extract call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedContent {
    pub content: String,
    pub summary: Option<String>,
}

/// The current extraction: the content plus the exact URLs that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub content: String,
    pub summary: Option<String>,
    pub processed_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlightExtract {
    token: RequestToken,
    urls: Vec<String>,
}

/// URL step: owns the candidate list and the extraction it produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionController {
    input: String,
    candidates: Vec<String>,
    extraction: Option<ExtractionResult>,
    content_loaded: bool,
    in_flight: Option<InFlightExtract>,
}

impl SubmissionController {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: String) {
        self.input = text;
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn extraction(&self) -> Option<&ExtractionResult> {
        self.extraction.as_ref()
    }

    pub fn content_loaded(&self) -> bool {
        self.content_loaded
    }

    pub fn is_extracting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// URLs the current extraction was built from, if content is loaded.
    pub fn processed_urls(&self) -> Option<&[String]> {
        if !self.content_loaded {
            return None;
        }
        self.extraction
            .as_ref()
            .map(|extraction| extraction.processed_urls.as_slice())
    }

    /// Appends `url_text` (trimmed) if it is a new absolute URL.
    pub fn add_candidate(&mut self, url_text: &str) -> Result<(), CandidateError> {
        let candidate = url_text.trim();
        if candidate.is_empty() {
            return Err(CandidateError::Empty);
        }
        if !is_absolute_url(candidate) {
            return Err(CandidateError::InvalidUrl);
        }
        if self.candidates.iter().any(|existing| existing == candidate) {
            return Err(CandidateError::Duplicate);
        }
        self.candidates.push(candidate.to_owned());
        Ok(())
    }

    /// Adds the URL currently typed in the input box, clearing the box on success.
    pub fn add_from_input(&mut self) -> Result<(), CandidateError> {
        let text = std::mem::take(&mut self.input);
        match self.add_candidate(&text) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.input = text;
                Err(err)
            }
        }
    }

    /// Removes the candidate at `index`; returns false when out of range.
    pub fn remove_candidate(&mut self, index: usize) -> bool {
        if index < self.candidates.len() {
            self.candidates.remove(index);
            true
        } else {
            false
        }
    }

    pub fn ensure_candidates(&self) -> Result<(), SubmitError> {
        if self.candidates.is_empty() {
            Err(SubmitError::NoCandidates)
        } else {
            Ok(())
        }
    }

    /// Starts an extraction attempt and returns the URLs to send.
    ///
    /// Revokes content-loaded for the duration of the attempt. Callers check
    /// `ensure_candidates` first.
    pub fn begin_extract(&mut self, token: RequestToken) -> Vec<String> {
        let urls = self.candidates.clone();
        self.content_loaded = false;
        self.in_flight = Some(InFlightExtract {
            token,
            urls: urls.clone(),
        });
        urls
    }

    /// Publishes the extraction if `token` is the attempt in flight.
    pub fn complete_extract(&mut self, token: RequestToken, extracted: ExtractedContent) -> bool {
        let Some(in_flight) = self.take_in_flight(token) else {
            return false;
        };
        self.extraction = Some(ExtractionResult {
            content: extracted.content,
            summary: extracted.summary,
            processed_urls: in_flight.urls,
        });
        self.content_loaded = true;
        true
    }

    /// Ends the attempt named by `token` without publishing anything.
    pub fn fail_extract(&mut self, token: RequestToken) -> bool {
        self.take_in_flight(token).is_some()
    }

    fn take_in_flight(&mut self, token: RequestToken) -> Option<InFlightExtract> {
        match &self.in_flight {
            Some(in_flight) if in_flight.token == token => self.in_flight.take(),
            _ => None,
        }
    }
}

// Relative references fail to parse without a base, so success means absolute.
fn is_absolute_url(text: &str) -> bool {
    Url::parse(text).is_ok()
}
