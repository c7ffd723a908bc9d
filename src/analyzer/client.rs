use crate::analyzer::prompts::PromptTemplate;
use crate::error::WinCleanError;
use crate::localization::LocalizedStrings;
use crate::models::OutputLanguage;
use rig::client::CompletionClient;
use rig::completion::{AssistantContent, CompletionModel};
use rig::providers::{anthropic, gemini, openai};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub model_name: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

pub trait ScriptAnalyzer: Send + Sync + std::fmt::Debug {
    /// Request a free-form report for the given script text. The script is
    /// embedded in the prompt verbatim and never re-derived or mutated.
    fn analyze<'a>(
        &'a self,
        script: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, WinCleanError>> + Send + 'a>>;
    fn model_name(&self) -> &str;
    fn timeout(&self) -> Duration;
}

#[derive(Debug)]
pub struct RigAnalyzer {
    config: AnalyzerConfig,
    provider: RigProvider,
    output_language: OutputLanguage,
}

#[derive(Debug)]
enum RigProvider {
    Gemini(gemini::Client),
    Anthropic(anthropic::Client),
    OpenAI(openai::Client),
}

impl RigAnalyzer {
    pub fn new(
        config: AnalyzerConfig,
        output_language: OutputLanguage,
    ) -> Result<Self, WinCleanError> {
        let provider = create_provider(&config)?;
        Ok(Self {
            config,
            provider,
            output_language,
        })
    }

    async fn make_api_request(&self, script: &str) -> Result<String, WinCleanError> {
        let prompt = PromptTemplate::build_review_prompt(script, &self.output_language);
        let system_prompt = PromptTemplate::build_system_prompt(&self.output_language);

        match &self.provider {
            RigProvider::Gemini(client) => {
                let model = client.completion_model(&self.config.model_name);
                self.send_completion_request(model, &prompt, system_prompt)
                    .await
            }
            RigProvider::Anthropic(client) => {
                let model = client.completion_model(&self.config.model_name);
                self.send_completion_request(model, &prompt, system_prompt)
                    .await
            }
            RigProvider::OpenAI(client) => {
                let model = client.completion_model(&self.config.model_name);
                self.send_completion_request(model, &prompt, system_prompt)
                    .await
            }
        }
    }

    async fn send_completion_request<M: CompletionModel>(
        &self,
        model: M,
        prompt: &str,
        system_prompt: String,
    ) -> Result<String, WinCleanError> {
        let mut builder = model.completion_request(prompt).preamble(system_prompt);

        if let Some(temp) = self.config.temperature {
            builder = builder.temperature(temp as f64);
        }

        if let Some(max_tokens) = self.config.max_tokens {
            builder = builder.max_tokens(max_tokens as u64);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| WinCleanError::LlmClientError(format!("Request failed: {}", e)))?;

        let mut extracted_text = String::new();
        for content in response.choice.iter() {
            if let AssistantContent::Text(text_content) = content {
                extracted_text.push_str(&text_content.text);
            }
        }

        Ok(extracted_text)
    }
}

impl ScriptAnalyzer for RigAnalyzer {
    fn analyze<'a>(
        &'a self,
        script: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, WinCleanError>> + Send + 'a>> {
        Box::pin(async move {
            let request = self.make_api_request(script);
            let response = tokio::time::timeout(self.timeout(), request)
                .await
                .map_err(|_| WinCleanError::AnalysisTimeout {
                    timeout: self.config.timeout_seconds,
                })??;

            // An empty completion is substituted with a fallback message,
            // not treated as a failure.
            if response.trim().is_empty() {
                let strings = LocalizedStrings::new(self.output_language);
                return Ok(strings.get_message("no_analysis").to_string());
            }

            Ok(response)
        })
    }

    fn model_name(&self) -> &str {
        &self.config.model_name
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds)
    }
}

fn create_provider(config: &AnalyzerConfig) -> Result<RigProvider, WinCleanError> {
    let model_name = config.model_name.trim();

    if is_gemini_model(model_name) {
        let api_key = resolve_api_key(config, "GEMINI_API_KEY")?;
        Ok(RigProvider::Gemini(gemini::Client::new(&api_key)))
    } else if is_claude_model(model_name) {
        let api_key = resolve_api_key(config, "ANTHROPIC_API_KEY")?;
        Ok(RigProvider::Anthropic(
            anthropic::ClientBuilder::new(&api_key).build(),
        ))
    } else if is_openai_model(model_name) {
        let api_key = resolve_api_key(config, "OPENAI_API_KEY")?;
        Ok(RigProvider::OpenAI(openai::Client::new(&api_key)))
    } else {
        Err(WinCleanError::LlmClientError(format!(
            "Unsupported model '{}'. Use Gemini (gemini-*), Anthropic (claude-*), or OpenAI (gpt-*) models",
            model_name
        )))
    }
}

/// Credential lookup happens before any client is constructed, so a
/// missing key fails deterministically with no network activity.
fn resolve_api_key(
    config: &AnalyzerConfig,
    env_var: &'static str,
) -> Result<String, WinCleanError> {
    config
        .api_key
        .clone()
        .or_else(|| std::env::var(env_var).ok())
        .filter(|key| !key.trim().is_empty())
        .ok_or(WinCleanError::MissingApiKey { env_var })
}

pub fn create_analyzer(
    model: &str,
    api_key: Option<String>,
    timeout_seconds: u64,
    output_language: OutputLanguage,
) -> Result<Box<dyn ScriptAnalyzer + Send + Sync>, WinCleanError> {
    let config = AnalyzerConfig {
        model_name: model.to_string(),
        api_key,
        timeout_seconds,
        max_tokens: Some(1000),
        temperature: Some(0.3),
    };

    let analyzer = RigAnalyzer::new(config, output_language)?;
    Ok(Box::new(analyzer))
}

fn is_gemini_model(model: &str) -> bool {
    let candidate = model.strip_prefix("gemini/").unwrap_or(model);
    candidate.starts_with("gemini-")
}

fn is_claude_model(model: &str) -> bool {
    let candidate = model.strip_prefix("anthropic/").unwrap_or(model);
    candidate.starts_with("claude-")
}

fn is_openai_model(model: &str) -> bool {
    let candidate = model.strip_prefix("openai/").unwrap_or(model);
    candidate.starts_with("gpt-") || candidate.starts_with("chatgpt-")
}
