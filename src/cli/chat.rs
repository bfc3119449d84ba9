//! `omniroute chat`: the portal in a terminal.
//!
//! Walks the same landing → login → dashboard flow as the browser UI and
//! drives an [`Assistant`] from a line-based REPL.

use super::{dashboard, output::Output};
use crate::assistant::{Assistant, SendOutcome};
use crate::llm::LLMClientFactoryTrait;
use crate::types::{parse_role, AppError, Result};
use omniroute_domain::{role::ROLE_CARDS, Ignored, Navigator, Role, View};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// What the REPL should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Leave the session.
    Quit,
}

/// One terminal session: navigation plus the assistant widget.
pub struct ChatSession {
    navigator: Navigator,
    assistant: Assistant,
    login_delay: Duration,
    output: Output,
}

impl ChatSession {
    /// Session on the landing page with the widget closed.
    pub fn new(
        factory: Arc<dyn LLMClientFactoryTrait>,
        login_delay: Duration,
        output: Output,
    ) -> Self {
        Self {
            navigator: Navigator::new(),
            assistant: Assistant::new(Role::Landing, factory),
            login_delay,
            output,
        }
    }

    /// Current navigation state
    pub fn navigator(&self) -> Navigator {
        self.navigator
    }

    /// The assistant behind the widget
    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    /// Read lines until `/quit` or end of input.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.show_view();
        let mut lines = input.lines();

        loop {
            self.output.prompt(self.prompt_label());
            let line = lines
                .next_line()
                .await
                .map_err(|e| AppError::Internal(format!("Failed to read input: {}", e)))?;

            let Some(line) = line else {
                break;
            };
            if self.handle_line(&line).await == Flow::Quit {
                break;
            }
        }

        self.output.newline();
        Ok(())
    }

    /// Apply one line of input.
    pub async fn handle_line(&mut self, line: &str) -> Flow {
        let line = line.trim();

        let Some(command) = line.strip_prefix('/') else {
            self.handle_text(line).await;
            return Flow::Continue;
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (command, None),
        };

        match (name, arg) {
            ("quit" | "exit", _) => return Flow::Quit,
            ("help", _) => self.help(),
            ("open", _) => {
                self.assistant.open();
                self.show_transcript();
            }
            ("close", _) => {
                self.assistant.close();
                self.output.info("Assistant closed");
            }
            ("role", Some(raw)) => match parse_role(raw) {
                Ok(role) => self.switch_role(role).await,
                Err(e) => self.output.error(e.detail()),
            },
            ("role", None) => self.output.warning("Usage: /role <customer|driver|partner|dispatcher>"),
            ("login", _) => self.login().await,
            ("back", _) => {
                if let Err(e) = self.navigator.back() {
                    self.output.error(&e.to_string());
                }
                self.show_view();
            }
            ("logout", _) => match self.navigator.logout() {
                Ok(changed) => {
                    self.apply_role_change(changed);
                    self.show_view();
                }
                Err(e) => self.output.error(&e.to_string()),
            },
            ("tab", Some(tab)) => self.show_dashboard(Some(tab)),
            _ => self
                .output
                .warning(&format!("Unknown command '/{}'. Try /help", name)),
        }

        Flow::Continue
    }

    async fn handle_text(&mut self, text: &str) {
        match self.navigator.view() {
            View::Landing if !text.is_empty() && !self.assistant_is_open() => {
                match parse_role(text) {
                    Ok(role) => self.select(role),
                    Err(e) => self.output.error(e.detail()),
                }
            }
            View::Login if text.is_empty() => self.login().await,
            _ if !self.assistant_is_open() => {
                if !text.is_empty() {
                    self.output.hint("The assistant is closed. Use /open to chat.");
                }
            }
            _ => self.send(text).await,
        }
    }

    async fn send(&mut self, text: &str) {
        if !text.trim().is_empty() {
            self.output.message(false, text.trim());
            self.output.pending("Thinking...");
        }

        match self.assistant.send(text).await {
            SendOutcome::Replied => {
                let snapshot = self.assistant.snapshot();
                if let Some(reply) = snapshot.messages.last() {
                    self.output.message(true, &reply.content);
                }
            }
            SendOutcome::Ignored(Ignored::Empty) => {}
            SendOutcome::Ignored(Ignored::Busy) => {
                self.output.warning("Still waiting for the previous reply")
            }
            SendOutcome::Discarded => self.output.info("Reply discarded after a role change"),
        }
    }

    fn select(&mut self, role: Role) {
        match self.navigator.select_role(role) {
            Ok(changed) => {
                self.apply_role_change(changed);
                self.show_view();
            }
            Err(e) => self.output.error(&e.to_string()),
        }
    }

    async fn login(&mut self) {
        if self.navigator.view() != View::Login {
            self.output.error(&format!(
                "Cannot log in from the {} view",
                self.navigator.view()
            ));
            return;
        }

        self.output.pending("Authenticating...");
        tokio::time::sleep(self.login_delay).await;

        match self.navigator.complete_login() {
            Ok(changed) => {
                self.apply_role_change(changed);
                self.show_view();
            }
            Err(e) => self.output.error(&e.to_string()),
        }
    }

    /// Walk back to the landing page and log in again as `role`.
    async fn switch_role(&mut self, role: Role) {
        if !role.is_operational() {
            self.output.error("Pick one of customer, driver, partner or dispatcher");
            return;
        }

        let walked = match self.navigator.view() {
            View::Dashboard => self.navigator.logout(),
            View::Login => self.navigator.back(),
            View::Landing => Ok(None),
        };
        match walked {
            Ok(changed) => self.apply_role_change(changed),
            Err(e) => {
                self.output.error(&e.to_string());
                return;
            }
        }

        self.select(role);
        self.login().await;
    }

    fn apply_role_change(&mut self, changed: Option<Role>) {
        if let Some(role) = changed {
            self.assistant.set_role(role);
            if self.assistant_is_open() {
                self.show_transcript();
            }
        }
    }

    fn assistant_is_open(&self) -> bool {
        self.assistant.snapshot().open
    }

    fn prompt_label(&self) -> &'static str {
        match self.navigator.dashboard_role() {
            Some(role) => role.as_str(),
            None => self.navigator.view().as_str(),
        }
    }

    fn show_view(&self) {
        match self.navigator.view() {
            View::Landing => {
                self.output.header("Choose your portal");
                for card in &ROLE_CARDS {
                    self.output
                        .kv(card.role.as_str(), &format!("{}: {}", card.title, card.description));
                }
                self.output.hint("Type a role to continue, /open to ask the assistant, /help for commands");
            }
            View::Login => {
                self.output.header(self.navigator.role().login_title());
                self.output.hint("Press Enter (or /login) to sign in, /back to return");
            }
            View::Dashboard => self.show_dashboard(None),
        }
    }

    fn show_dashboard(&self, tab: Option<&str>) {
        let Some(role) = self.navigator.dashboard_role() else {
            self.output.warning("Log in to see a dashboard");
            return;
        };
        if let Err(e) = dashboard::run(role.as_str(), tab, &self.output) {
            self.output.error(e.detail());
        }
    }

    fn show_transcript(&self) {
        let snapshot = self.assistant.snapshot();
        self.output.subheader("OmniRoute Assistant");
        for message in &snapshot.messages {
            self.output.message(message.role == "assistant", &message.content);
        }
    }

    fn help(&self) {
        self.output.header("Commands");
        for (cmd, what) in [
            ("/open, /close", "show or hide the assistant"),
            ("/role <role>", "switch portal (logs out and back in)"),
            ("/login, /back", "finish or abandon the login screen"),
            ("/logout", "return to the landing page"),
            ("/tab <name>", "show another dashboard tab"),
            ("/quit", "leave"),
        ] {
            self.output.kv(cmd, what);
        }
    }
}

/// Run an interactive session on stdin, optionally logged in as `role`.
pub async fn run(
    factory: Arc<dyn LLMClientFactoryTrait>,
    role: Option<&str>,
    login_delay: Duration,
    output: Output,
) -> Result<()> {
    let initial = role.map(parse_role).transpose()?;

    let mut session = ChatSession::new(factory, login_delay, output);
    session.output.banner();
    if let Some(role) = initial {
        session.switch_role(role).await;
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session.run(stdin).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{LLMClient, Provider};
    use async_trait::async_trait;
    use omniroute_domain::prompt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct EchoClient;

    #[async_trait]
    impl LLMClient for EchoClient {
        async fn generate(&self, prompt: &str) -> Result<String> {
            Ok(format!("echo: {}", prompt))
        }

        async fn generate_with_system(&self, _system: &str, prompt: &str) -> Result<String> {
            self.generate(prompt).await
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    #[derive(Default)]
    struct EchoFactory {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LLMClientFactoryTrait for EchoFactory {
        fn default_provider(&self) -> Provider {
            Provider::Gemini {
                api_key: Some("test".to_string()),
                api_base: "http://127.0.0.1:9".to_string(),
                model: "echo".to_string(),
                timeout: None,
            }
        }

        async fn create_default(&self) -> Result<Box<dyn LLMClient>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(EchoClient))
        }
    }

    fn session() -> (ChatSession, Arc<EchoFactory>) {
        let factory = Arc::new(EchoFactory::default());
        let session = ChatSession::new(factory.clone(), Duration::ZERO, Output::no_color());
        (session, factory)
    }

    #[tokio::test]
    async fn test_landing_login_dashboard_flow() {
        let (mut session, _) = session();

        session.handle_line("driver").await;
        assert_eq!(session.navigator().view(), View::Login);
        assert_eq!(session.navigator().role(), Role::Driver);
        assert_eq!(session.assistant().role(), Role::Driver);

        session.handle_line("").await;
        assert_eq!(session.navigator().view(), View::Dashboard);

        session.handle_line("/logout").await;
        assert_eq!(session.navigator().view(), View::Landing);
        assert_eq!(session.assistant().role(), Role::Landing);
    }

    #[tokio::test]
    async fn test_closed_widget_does_not_send() {
        let (mut session, factory) = session();
        session.handle_line("/role partner").await;

        session.handle_line("Where is my invoice?").await;

        assert_eq!(factory.calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.assistant().snapshot().messages.len(), 1);
    }

    #[tokio::test]
    async fn test_open_widget_sends_and_records_reply() {
        let (mut session, factory) = session();
        session.handle_line("/role driver").await;
        session.handle_line("/open").await;

        session.handle_line("What is the ETA for stop 2?").await;

        let messages = session.assistant().snapshot().messages;
        assert_eq!(factory.calls.load(Ordering::SeqCst), 1);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, prompt::greeting(Role::Driver));
        assert_eq!(messages[1].content, "What is the ETA for stop 2?");
        assert_eq!(messages[2].content, "echo: What is the ETA for stop 2?");
    }

    #[tokio::test]
    async fn test_role_switch_resets_transcript() {
        let (mut session, _) = session();
        session.handle_line("/role customer").await;
        session.handle_line("/open").await;
        session.handle_line("Track CHN-001").await;

        session.handle_line("/role dispatcher").await;

        let snapshot = session.assistant().snapshot();
        assert_eq!(session.navigator().view(), View::Dashboard);
        assert_eq!(snapshot.role, "dispatcher");
        assert_eq!(snapshot.messages.len(), 1);
        assert_eq!(snapshot.messages[0].content, prompt::greeting(Role::Dispatcher));
        assert!(snapshot.open);
    }

    #[tokio::test]
    async fn test_invalid_commands_keep_state() {
        let (mut session, _) = session();

        assert_eq!(session.handle_line("/logout").await, Flow::Continue);
        assert_eq!(session.handle_line("/role pilot").await, Flow::Continue);
        assert_eq!(session.handle_line("/frobnicate").await, Flow::Continue);
        assert_eq!(session.handle_line("nobody").await, Flow::Continue);

        assert_eq!(session.navigator(), Navigator::new());
    }

    #[tokio::test]
    async fn test_run_stops_at_quit() {
        let (mut session, factory) = session();
        let input: &[u8] = b"/role driver\n/open\nhello\n/quit\nnever sent\n";

        session.run(input).await.unwrap();

        assert_eq!(factory.calls.load(Ordering::SeqCst), 1);
    }
}
