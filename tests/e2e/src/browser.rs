use anyhow::Result;
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((1280, 900)))
            .build()
            .map_err(|e| anyhow::anyhow!("launch options: {e}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let element = self.tab.wait_for_element(selector)?;
        Ok(element.get_attribute_value(name)?)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    /// Evaluate a JS expression and return its JSON value.
    pub fn eval(&self, expression: &str) -> Result<serde_json::Value> {
        let object = self.tab.evaluate(expression, false)?;
        Ok(object.value.unwrap_or(serde_json::Value::Null))
    }

    /// Poll `selector`'s inner text until `pred` holds or `timeout` elapses.
    pub fn wait_for_text<F>(&self, selector: &str, timeout: Duration, pred: F) -> Result<String>
    where
        F: Fn(&str) -> bool,
    {
        let deadline = Instant::now() + timeout;
        loop {
            let text = self.find_element(selector)?;
            if pred(&text) {
                return Ok(text);
            }
            if Instant::now() >= deadline {
                anyhow::bail!("{selector} never matched, last text: {text:?}");
            }
            std::thread::sleep(Duration::from_millis(100));
        }
    }
}
