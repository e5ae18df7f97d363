// Live browser layer over the Chrome DevTools Protocol
//
// Wraps chromiumoxide's Browser/Page with the small surface the page
// objects need: navigation joined against the configured base URL,
// JavaScript readouts into serde values, and CSS/text-based interaction.
// Only compiled with the "browser" feature.

use std::time::Duration;

use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
use chromiumoxide::page::Page as CdpPage;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};

/// A launched Chromium instance driving the suite.
pub struct Browser {
    inner: CdpBrowser,
    handler: JoinHandle<()>,
    config: Config,
}

impl Browser {
    /// Launches Chromium according to `config`.
    pub async fn launch(config: Config) -> Result<Self> {
        let mut builder = CdpConfig::builder().window_size(1280, 720);

        if !config.headless {
            builder = builder.with_head();
        }
        // Required for containerized CI runners
        builder = builder.no_sandbox();

        if let Some(ref path) = config.chrome_executable {
            builder = builder.chrome_executable(path);
        }

        let cdp_config = builder.build().map_err(Error::BrowserLaunch)?;

        let (inner, mut events) = CdpBrowser::launch(cdp_config)
            .await
            .map_err(|e| Error::BrowserLaunch(e.to_string()))?;

        // Drive the CDP event loop until the browser goes away
        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        info!(headless = config.headless, "browser launched");
        Ok(Self {
            inner,
            handler,
            config,
        })
    }

    /// Opens a fresh page on `about:blank`.
    pub async fn new_page(&self) -> Result<Page> {
        let page = self
            .inner
            .new_page("about:blank")
            .await
            .map_err(|e| Error::BrowserLaunch(format!("cannot open page: {e}")))?;
        Ok(Page {
            inner: page,
            config: self.config.clone(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Closes the browser and stops the event loop.
    pub async fn close(mut self) -> Result<()> {
        self.inner
            .close()
            .await
            .map_err(|e| Error::BrowserLaunch(format!("close failed: {e}")))?;
        self.handler.abort();
        Ok(())
    }
}

/// A single tab, carrying the suite configuration it was opened with.
#[derive(Clone)]
pub struct Page {
    inner: CdpPage,
    config: Config,
}

impl Page {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Navigates to a path joined onto the configured base URL.
    ///
    /// `open("tables")` goes to `<base>/tables`; `open("")` goes to the
    /// base URL itself.
    pub async fn open(&self, path: &str) -> Result<()> {
        let url = self.config.page_url(path)?;
        self.goto_url(url.as_str()).await
    }

    /// Navigates to an absolute URL and waits for the load to settle.
    pub async fn goto_url(&self, url: &str) -> Result<()> {
        debug!(%url, "navigating");
        let navigation = async {
            self.inner
                .goto(url)
                .await
                .map_err(|e| Error::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            self.inner
                .wait_for_navigation()
                .await
                .map_err(|e| Error::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            Ok(())
        };
        self.with_timeout(navigation, &format!("navigation to '{url}'"))
            .await
    }

    /// Evaluates JavaScript in the page and deserializes the result.
    ///
    /// Promises are awaited, so async IIFEs work here too.
    pub async fn evaluate<T: DeserializeOwned>(&self, script: &str) -> Result<T> {
        let result = self
            .inner
            .evaluate(script)
            .await
            .map_err(|e| Error::Evaluation(e.to_string()))?;
        result
            .into_value::<T>()
            .map_err(|e| Error::Evaluation(format!("result deserialization: {e}")))
    }

    /// Evaluates JavaScript for its side effects only.
    pub async fn evaluate_unit(&self, script: &str) -> Result<()> {
        self.inner
            .evaluate(script)
            .await
            .map_err(|e| Error::Evaluation(e.to_string()))?;
        Ok(())
    }

    /// Clicks the first element matching a CSS selector.
    pub async fn click(&self, selector: &str) -> Result<()> {
        let element = self
            .inner
            .find_element(selector)
            .await
            .map_err(|_| Error::ElementNotFound(selector.to_string()))?;
        element
            .click()
            .await
            .map_err(|e| Error::Evaluation(format!("click '{selector}': {e}")))?;
        Ok(())
    }

    /// Types text into the element matching a CSS selector.
    pub async fn type_into(&self, selector: &str, text: &str) -> Result<()> {
        let element = self
            .inner
            .find_element(selector)
            .await
            .map_err(|_| Error::ElementNotFound(selector.to_string()))?;
        element
            .click()
            .await
            .map_err(|e| Error::Evaluation(format!("focus '{selector}': {e}")))?
            .type_str(text)
            .await
            .map_err(|e| Error::Evaluation(format!("type into '{selector}': {e}")))?;
        Ok(())
    }

    /// Presses a single key with the element matching `selector` focused.
    pub async fn press_key(&self, selector: &str, key: &str) -> Result<()> {
        let element = self
            .inner
            .find_element(selector)
            .await
            .map_err(|_| Error::ElementNotFound(selector.to_string()))?;
        element
            .click()
            .await
            .map_err(|e| Error::Evaluation(format!("focus '{selector}': {e}")))?
            .press_key(key)
            .await
            .map_err(|e| Error::Evaluation(format!("press '{key}': {e}")))?;
        Ok(())
    }

    /// Trimmed text content of the first element matching `selector`.
    pub async fn text_content(&self, selector: &str) -> Result<String> {
        let script = format!(
            "(() => {{ const el = document.querySelector({sel}); \
             return el ? el.textContent.trim() : null; }})()",
            sel = js_string(selector)
        );
        let text: Option<String> = self.evaluate(&script).await?;
        text.ok_or_else(|| Error::ElementNotFound(selector.to_string()))
    }

    /// Whether any element matching `selector` is rendered and visible.
    pub async fn is_visible(&self, selector: &str) -> Result<bool> {
        let script = format!(
            "(() => {{ const el = document.querySelector({sel}); \
             return !!el && el.offsetParent !== null; }})()",
            sel = js_string(selector)
        );
        self.evaluate(&script).await
    }

    /// Whether a heading of `tag` whose text contains `text` is visible.
    pub async fn heading_contains(&self, tag: &str, text: &str) -> Result<bool> {
        let script = format!(
            "Array.from(document.querySelectorAll({tag})).some(el => \
             el.textContent.includes({text}) && el.offsetParent !== null)",
            tag = js_string(tag),
            text = js_string(text)
        );
        self.evaluate(&script).await
    }

    /// Clicks an anchor by its visible text and waits for the navigation.
    ///
    /// Prefers an exact trimmed-text match to avoid ambiguous matches like
    /// "File Download" vs "Secure File Download", falling back to substring
    /// containment when no exact match is present.
    pub async fn click_link_text(&self, text: &str) -> Result<()> {
        debug!(link = text, "clicking link by text");
        let script = format!(
            "(() => {{ \
               const anchors = Array.from(document.querySelectorAll('a')); \
               const target = anchors.find(a => a.textContent.trim() === {t}) \
                 || anchors.find(a => a.textContent.includes({t})); \
               if (!target) return false; \
               target.click(); \
               return true; \
             }})()",
            t = js_string(text)
        );
        let clicked: bool = self.evaluate(&script).await?;
        if !clicked {
            return Err(Error::ElementNotFound(format!("link with text '{text}'")));
        }
        let wait = async {
            self.inner
                .wait_for_navigation()
                .await
                .map_err(|e| Error::Navigation {
                    url: text.to_string(),
                    message: e.to_string(),
                })?;
            Ok(())
        };
        self.with_timeout(wait, &format!("navigation after clicking '{text}'"))
            .await
    }

    /// Anchor texts under `selector`, trimmed, in document order.
    pub async fn link_texts(&self, selector: &str) -> Result<Vec<String>> {
        let script = format!(
            "Array.from(document.querySelectorAll({sel})).map(a => a.textContent.trim())",
            sel = js_string(selector)
        );
        self.evaluate(&script).await
    }

    /// Fetches `href` from within the page and returns the raw bytes.
    ///
    /// Runs a same-origin fetch so cookies and relative URLs behave as a
    /// real click would; content comes back base64-encoded over CDP.
    pub async fn fetch_bytes(&self, href: &str) -> Result<Vec<u8>> {
        let script = format!(
            "(async () => {{ \
               const res = await fetch({href}); \
               if (!res.ok) throw new Error('HTTP ' + res.status); \
               const bytes = new Uint8Array(await res.arrayBuffer()); \
               let binary = ''; \
               for (let i = 0; i < bytes.length; i++) binary += String.fromCharCode(bytes[i]); \
               return btoa(binary); \
             }})()",
            href = js_string(href)
        );
        let encoded: String = self.evaluate(&script).await?;
        use base64::Engine;
        base64::engine::general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| Error::Evaluation(format!("base64 decode of fetched body: {e}")))
    }

    /// Raw CDP page handle, for operations the wrapper does not cover.
    pub fn cdp(&self) -> &CdpPage {
        &self.inner
    }

    async fn with_timeout<F>(&self, fut: F, what: &str) -> Result<()>
    where
        F: std::future::Future<Output = Result<()>>,
    {
        match tokio::time::timeout(self.config.navigation_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(format!(
                "{what} exceeded {}ms",
                self.config.navigation_timeout.as_millis()
            ))),
        }
    }

    /// Sleeps briefly; for settling animations the site runs after clicks.
    pub async fn settle(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Embeds a Rust string as a quoted JavaScript string literal.
pub(crate) fn js_string(s: &str) -> String {
    serde_json::to_string(s).expect("strings always serialize")
}
