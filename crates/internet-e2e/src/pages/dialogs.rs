// JavaScript Alerts page
//
// Native dialogs block the page's JS, so the triggering click is deferred
// with setTimeout and the dialog is resolved over CDP once its opening
// event arrives.

use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::page::{
    DialogType, EventJavascriptDialogOpening, HandleJavaScriptDialogParams,
};
use futures::StreamExt;
use tracing::debug;

use crate::browser::{js_string, Page};
use crate::error::{Error, Result};

/// How to resolve a dialog once it opens.
#[derive(Debug, Clone)]
pub enum DialogAction {
    Accept,
    Dismiss,
    /// Accept a prompt with the given input text.
    AcceptWith(String),
}

/// What the page reported when the dialog opened.
#[derive(Debug, Clone)]
pub struct DialogEvent {
    /// "alert", "confirm", "prompt" or "beforeunload".
    pub kind: &'static str,
    pub message: String,
    /// Default input of a prompt dialog.
    pub default_prompt: Option<String>,
}

pub struct JsAlertsPage {
    page: Page,
}

impl JsAlertsPage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Whether the JavaScript Alerts header is rendered.
    pub async fn is_opened(&self) -> Result<bool> {
        self.page.heading_contains("h3", "JavaScript Alerts").await
    }

    /// Clicks the alert button and accepts the dialog.
    pub async fn trigger_alert(&self) -> Result<DialogEvent> {
        self.click_and_handle("button[onclick='jsAlert()']", DialogAction::Accept)
            .await
    }

    /// Clicks the confirm button and resolves the dialog per `action`.
    pub async fn trigger_confirm(&self, action: DialogAction) -> Result<DialogEvent> {
        self.click_and_handle("button[onclick='jsConfirm()']", action)
            .await
    }

    /// Clicks the prompt button and resolves the dialog per `action`.
    pub async fn trigger_prompt(&self, action: DialogAction) -> Result<DialogEvent> {
        self.click_and_handle("button[onclick='jsPrompt()']", action)
            .await
    }

    /// The page's "You ..." result line after a dialog round-trip.
    pub async fn result_text(&self) -> Result<String> {
        self.page.text_content("#result").await
    }

    async fn click_and_handle(
        &self,
        selector: &str,
        action: DialogAction,
    ) -> Result<DialogEvent> {
        let mut dialogs = self
            .page
            .cdp()
            .event_listener::<EventJavascriptDialogOpening>()
            .await
            .map_err(|e| Error::Evaluation(format!("dialog listener: {e}")))?;

        // The click is deferred so the evaluate returns before the dialog
        // suspends the page's JS.
        let script = format!(
            "setTimeout(() => document.querySelector({sel}).click(), 0)",
            sel = js_string(selector)
        );
        self.page.evaluate_unit(&script).await?;

        let event = tokio::time::timeout(Duration::from_secs(10), dialogs.next())
            .await
            .map_err(|_| Error::Timeout("waiting for dialog to open".to_string()))?
            .ok_or_else(|| Error::Evaluation("dialog event stream closed".to_string()))?;

        debug!(message = %event.message, "dialog opened");

        let accept = matches!(action, DialogAction::Accept | DialogAction::AcceptWith(_));
        let mut builder = HandleJavaScriptDialogParams::builder().accept(accept);
        if let DialogAction::AcceptWith(ref text) = action {
            builder = builder.prompt_text(text.clone());
        }
        let params = builder.build().map_err(Error::Evaluation)?;

        self.page
            .cdp()
            .execute(params)
            .await
            .map_err(|e| Error::Evaluation(format!("handling dialog: {e}")))?;

        Ok(DialogEvent {
            kind: match event.r#type {
                DialogType::Alert => "alert",
                DialogType::Confirm => "confirm",
                DialogType::Prompt => "prompt",
                DialogType::Beforeunload => "beforeunload",
            },
            message: event.message.clone(),
            default_prompt: event.default_prompt.clone(),
        })
    }
}
