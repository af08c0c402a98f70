//! HTTP client for the Glossa NLP API.
//!
//! Each method serializes its arguments into a JSON body, issues a single
//! `POST {base_url}/{endpoint}` request, and decodes the JSON response into
//! a typed result. There is no batching, pagination, or retrying; errors
//! propagate to the caller as [`GlossaError`].

mod config;

pub use config::ClientConfig;

use indexmap::IndexMap;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::GlossaError;
use crate::input::{ParseRequest, TextInput};
use crate::models::{CoreferenceClusters, CoreferenceOutput, Document, MeaningGraph};

/// Client for a remote Glossa NLP server.
///
/// Holds only immutable configuration and the HTTP transport. Cloning is
/// cheap; clones share the underlying connection pool, and independent
/// calls are safe from concurrent tasks.
#[derive(Debug, Clone)]
pub struct GlossaClient {
    config: ClientConfig,
    base: String,
    client: Client,
}

/// Request body for endpoints taking a single text.
#[derive(Debug, Serialize)]
struct TextRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

/// Request body for endpoints ranking up to `topk` results.
#[derive(Debug, Serialize)]
struct RankedRequest<'a> {
    text: &'a str,
    topk: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

/// Request body for the similarity endpoint; `text` is one pair or a list
/// of pairs.
#[derive(Debug, Serialize)]
struct SimilarityRequest<'a, T: Serialize> {
    text: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

impl GlossaClient {
    /// Create a client from a configuration.
    ///
    /// Fails with [`GlossaError::Validation`] when the base URL is not an
    /// absolute HTTP(S) URL, and with [`GlossaError::Transport`] when the
    /// HTTP transport cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, GlossaError> {
        let url = Url::parse(&config.base_url).map_err(|e| {
            GlossaError::Validation(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(GlossaError::Validation(format!(
                "unsupported base URL scheme {:?}",
                url.scheme()
            )));
        }
        let base = url.to_string().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GlossaError::Transport(e.to_string()))?;
        Ok(Self {
            config,
            base,
            client,
        })
    }

    /// Create a client for `base_url` with default configuration.
    pub fn from_url(base_url: impl Into<String>) -> Result<Self, GlossaError> {
        Self::new(ClientConfig::new(base_url))
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run the server's default analysis pipeline over `input`.
    ///
    /// The result maps each task the server ran to per-sentence
    /// annotations, in input sentence order.
    pub async fn parse(&self, input: impl Into<TextInput>) -> Result<Document, GlossaError> {
        self.parse_request(ParseRequest::from_input(input.into()))
            .await
    }

    /// Run a restricted set of tasks over `input`.
    ///
    /// `tasks` is an allow list and `skip_tasks` a deny list over task
    /// names; either may be empty.
    pub async fn parse_with(
        &self,
        input: impl Into<TextInput>,
        tasks: &[&str],
        skip_tasks: &[&str],
    ) -> Result<Document, GlossaError> {
        let mut request = ParseRequest::from_input(input.into());
        if !tasks.is_empty() {
            request.tasks = Some(tasks.iter().map(|s| s.to_string()).collect());
        }
        if !skip_tasks.is_empty() {
            request.skip_tasks = Some(skip_tasks.iter().map(|s| s.to_string()).collect());
        }
        self.parse_request(request).await
    }

    /// Send a caller-built request envelope to the parse endpoint.
    ///
    /// The envelope is validated before any network I/O; the configured
    /// language hint is filled in unless the envelope already carries one.
    pub async fn parse_request(&self, request: ParseRequest) -> Result<Document, GlossaError> {
        self.post_envelope("/parse", request).await
    }

    /// Split `text` into sentences and tokens.
    ///
    /// Returns one token list per sentence, in input order. `coarse`
    /// selects the coarser segmentation granularity.
    pub async fn tokenize(
        &self,
        text: &str,
        coarse: bool,
    ) -> Result<Vec<Vec<String>>, GlossaError> {
        let task = if coarse { "tok/coarse" } else { "tok/fine" };
        let mut request = ParseRequest::from_input(TextInput::Text(text.to_string()));
        request.tasks = Some(vec![task.to_string()]);
        let doc: Document = self.post_envelope("/parse", request).await?;
        if doc.get(task).is_some() {
            doc.token_lists(task)
        } else if let Some(only) = doc.single_task() {
            doc.token_lists(&only)
        } else {
            Err(GlossaError::Decode(format!(
                "no {task} annotations in parse response"
            )))
        }
    }

    /// Rewrite `text` into the given target style, e.g. a formal register.
    pub async fn text_style_transfer(
        &self,
        text: &str,
        target_style: &str,
    ) -> Result<String, GlossaError> {
        #[derive(Serialize)]
        struct StyleTransferRequest<'a> {
            text: &'a str,
            target_style: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            language: Option<&'a str>,
        }

        let request = StyleTransferRequest {
            text,
            target_style,
            language: self.language(),
        };
        self.post("/text_style_transfer", &request).await
    }

    /// Semantic similarity of one sentence pair, in `[0, 1]`.
    pub async fn semantic_textual_similarity(
        &self,
        first: &str,
        second: &str,
    ) -> Result<f64, GlossaError> {
        let request = SimilarityRequest {
            text: (first, second),
            language: self.language(),
        };
        self.post("/semantic_textual_similarity", &request).await
    }

    /// Semantic similarity of each pair, order-preserving.
    pub async fn semantic_textual_similarity_batch(
        &self,
        pairs: &[(&str, &str)],
    ) -> Result<Vec<f64>, GlossaError> {
        let request = SimilarityRequest {
            text: pairs,
            language: self.language(),
        };
        self.post("/semantic_textual_similarity", &request).await
    }

    /// Resolve coreferent mentions in raw text.
    ///
    /// The server segments and tokenizes the text; span offsets in the
    /// result index the returned token sequence.
    pub async fn coreference_resolution(
        &self,
        text: &str,
    ) -> Result<CoreferenceOutput, GlossaError> {
        let request = ParseRequest::from_input(TextInput::Text(text.to_string()));
        self.post_envelope("/coreference_resolution", request).await
    }

    /// Resolve coreferent mentions over pre-tokenized sentences.
    ///
    /// `speakers`, when supplied, must carry one entry per sentence;
    /// a length mismatch fails with [`GlossaError::Validation`] before any
    /// request is made.
    pub async fn coreference_resolution_tokens(
        &self,
        tokens: &[Vec<String>],
        speakers: Option<&[String]>,
    ) -> Result<CoreferenceClusters, GlossaError> {
        let mut request = ParseRequest::from_input(TextInput::Tokens(tokens.to_vec()));
        request.speakers = speakers.map(<[String]>::to_vec);
        self.post_envelope("/coreference_resolution", request).await
    }

    /// Extract up to `topk` keyphrases, best first, with relevance scores.
    pub async fn keyphrase_extraction(
        &self,
        text: &str,
        topk: usize,
    ) -> Result<IndexMap<String, f64>, GlossaError> {
        let request = RankedRequest {
            text,
            topk,
            language: self.language(),
        };
        self.post("/keyphrase_extraction", &request).await
    }

    /// Pick up to `topk` summarizing sentences, best first, with scores.
    pub async fn extractive_summarization(
        &self,
        text: &str,
        topk: usize,
    ) -> Result<IndexMap<String, f64>, GlossaError> {
        let request = RankedRequest {
            text,
            topk,
            language: self.language(),
        };
        self.post("/extractive_summarization", &request).await
    }

    /// Generate a short abstractive summary of `text`.
    pub async fn abstractive_summarization(&self, text: &str) -> Result<String, GlossaError> {
        let request = TextRequest {
            text,
            language: self.language(),
        };
        self.post("/abstractive_summarization", &request).await
    }

    /// Parse each sentence into an abstract meaning graph.
    pub async fn abstract_meaning_representation(
        &self,
        input: impl Into<TextInput>,
    ) -> Result<Vec<MeaningGraph>, GlossaError> {
        let request = ParseRequest::from_input(input.into());
        self.post_envelope("/abstract_meaning_representation", request)
            .await
    }

    /// Correct grammatical errors, one output string per input.
    pub async fn grammatical_error_correction(
        &self,
        texts: &[&str],
    ) -> Result<Vec<String>, GlossaError> {
        #[derive(Serialize)]
        struct CorrectionRequest<'a> {
            text: &'a [&'a str],
            #[serde(skip_serializing_if = "Option::is_none")]
            language: Option<&'a str>,
        }

        let request = CorrectionRequest {
            text: texts,
            language: self.language(),
        };
        self.post("/grammatical_error_correction", &request).await
    }

    /// Identify the language of each text, returned as ISO 639-1 codes.
    pub async fn language_identification(
        &self,
        texts: &[&str],
    ) -> Result<Vec<String>, GlossaError> {
        #[derive(Serialize)]
        struct IdentificationRequest<'a> {
            text: &'a [&'a str],
        }

        self.post(
            "/language_identification",
            &IdentificationRequest { text: texts },
        )
        .await
    }

    /// Polarity of `text`, from most negative to most positive.
    pub async fn sentiment_analysis(&self, text: &str) -> Result<f64, GlossaError> {
        let request = TextRequest {
            text,
            language: self.language(),
        };
        self.post("/sentiment_analysis", &request).await
    }

    fn language(&self) -> Option<&str> {
        self.config.language.as_deref()
    }

    /// Validate a request envelope, fill in the configured language, and
    /// post it.
    async fn post_envelope<T>(
        &self,
        endpoint: &str,
        mut request: ParseRequest,
    ) -> Result<T, GlossaError>
    where
        T: DeserializeOwned,
    {
        if request.language.is_none() {
            request.language = self.config.language.clone();
        }
        request.validate()?;
        self.post(endpoint, &request).await
    }

    /// Issue one POST and decode the JSON response.
    async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, GlossaError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base, endpoint);
        debug!("POST {}", url);

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.config.auth {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GlossaError::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GlossaError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(GlossaError::Request {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| GlossaError::Decode(format!("{endpoint}: {e}")))
    }
}
