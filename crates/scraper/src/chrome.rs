// ABOUTME: Browser implementation backed by a local Chrome instance via headless_chrome.
// ABOUTME: Launches one window, drives a single tab, and maps element waits onto Lookup.

use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context};
use headless_chrome::{Element, LaunchOptions, Tab};

use crate::browser::{Browser, ElementHandle, Locator, Lookup};
use crate::error::{Result, ScrapeError};

const WINDOW_SIZE: (u32, u32) = (1400, 700);
const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 ",
    "(KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
);

/// A Chrome session with one tab.
pub struct ChromeBrowser {
    // Dropping the browser kills the Chrome process, so it lives as long as the tab.
    _browser: headless_chrome::Browser,
    tab: Arc<Tab>,
}

impl ChromeBrowser {
    /// Starts Chrome. In headless mode a desktop user agent is sent.
    pub fn launch(headless: bool) -> Result<Self> {
        let user_agent = format!("--user-agent={USER_AGENT}");
        let mut args: Vec<&OsStr> = Vec::new();
        if headless {
            args.push(OsStr::new(&user_agent));
        }
        let options = LaunchOptions::default_builder()
            .headless(headless)
            .sandbox(!headless)
            .window_size(Some(WINDOW_SIZE))
            .args(args)
            .build()
            .map_err(|e| {
                ScrapeError::launch("configure chrome", Some(anyhow!(e.to_string())))
            })?;

        let browser = headless_chrome::Browser::new(options)
            .map_err(|e| ScrapeError::launch("start chrome", Some(e)))?;
        let tab = browser
            .new_tab()
            .map_err(|e| ScrapeError::launch("open tab", Some(e)))?;
        tracing::info!(headless, "chrome started");

        Ok(Self {
            _browser: browser,
            tab,
        })
    }

    fn resolve(&self, locator: &Locator) -> anyhow::Result<Element<'_>> {
        match locator {
            Locator::XPath(expr) => self.tab.find_element_by_xpath(expr),
            Locator::Id(id) => self.tab.find_element(&format!("#{id}")),
        }
    }
}

impl Browser for ChromeBrowser {
    fn navigate(&mut self, url: &str) -> anyhow::Result<()> {
        self.tab
            .navigate_to(url)?
            .wait_until_navigated()
            .with_context(|| format!("waiting for {url}"))?;
        Ok(())
    }

    fn page_source(&mut self) -> anyhow::Result<String> {
        self.tab.get_content()
    }

    fn wait_for(&mut self, locator: &Locator, timeout: Duration) -> Lookup {
        let found = match locator {
            Locator::XPath(expr) => self
                .tab
                .wait_for_xpath_with_custom_timeout(expr, timeout)
                .map(|_| ()),
            Locator::Id(id) => self
                .tab
                .wait_for_element_with_custom_timeout(&format!("#{id}"), timeout)
                .map(|_| ()),
        };
        match found {
            Ok(()) => Lookup::Found(ElementHandle::new(locator.clone())),
            Err(e) => {
                tracing::debug!(%locator, error = %e, "element not found");
                Lookup::NotFound
            }
        }
    }

    fn click(&mut self, element: &ElementHandle) -> anyhow::Result<()> {
        self.resolve(element.locator())?.click()?;
        // the click only dispatches; the next page_source must see the new page
        self.tab
            .wait_until_navigated()
            .with_context(|| format!("waiting after click on {}", element.locator()))?;
        Ok(())
    }

    fn inner_html(&mut self, element: &ElementHandle) -> anyhow::Result<String> {
        let remote = self
            .resolve(element.locator())?
            .call_js_fn("function() { return this.innerHTML; }", vec![], false)?;
        match remote.value {
            Some(serde_json::Value::String(html)) => Ok(html),
            other => Err(anyhow!(
                "innerHTML of {} was not a string: {:?}",
                element.locator(),
                other
            )),
        }
    }

    fn close(&mut self) -> anyhow::Result<()> {
        self.tab.close(true)?;
        Ok(())
    }
}
