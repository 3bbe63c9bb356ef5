//! These need the `dx` CLI and a local Chrome; run with `cargo test -p e2e -- --ignored`.

use e2e::browser::Browser;
use e2e::test_server::TestServer;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(10);

#[tokio::test]
#[ignore]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(
        body.contains("Burak Akbulut") || body.contains("DOCTYPE"),
        "Should contain HTML"
    );
}

#[tokio::test]
#[ignore]
async fn test_language_switch_translates_page() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch Chrome");
    let page = browser.new_page().expect("Failed to open tab");
    page.goto(server.url()).expect("Failed to load homepage");

    page.wait_for_text("#skills h2", WAIT, |t| t == "Yetenekler")
        .expect("Turkish is the default");

    page.click("button[data-lang='en']").expect("Failed to click EN");
    page.wait_for_text("#skills h2", WAIT, |t| t == "Skills")
        .expect("Headings should switch to English");

    let href = page.attribute("#cv-link", "href").expect("cv link");
    assert_eq!(href.as_deref(), Some("assets/files/cv_en.pdf"));
    let lang = page.eval("document.documentElement.lang").expect("eval");
    assert_eq!(lang, serde_json::json!("en"));
}

#[tokio::test]
#[ignore]
async fn test_back_to_top_appears_after_scrolling() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch Chrome");
    let page = browser.new_page().expect("Failed to open tab");
    page.goto(server.url()).expect("Failed to load homepage");
    page.find_element("#back-to-top").expect("button rendered");

    page.eval("window.scrollTo(0, 800)").expect("scroll");
    std::thread::sleep(Duration::from_millis(500));

    let class = page.attribute("#back-to-top", "class").expect("class");
    assert!(class.unwrap_or_default().contains("show"));
}

#[tokio::test]
#[ignore]
async fn test_contact_form_reports_status() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch Chrome");
    let page = browser.new_page().expect("Failed to open tab");
    page.goto(server.url()).expect("Failed to load homepage");

    page.click("button[data-lang='en']").expect("Failed to click EN");
    page.eval(
        r#"(() => {
            const set = (sel, v) => {
                const el = document.querySelector(sel);
                el.value = v;
                el.dispatchEvent(new Event("input", { bubbles: true }));
            };
            set("input[name=name]", "Ada");
            set("input[name=email]", "ada@example.com");
            set("textarea[name=message]", "Hello");
        })()"#,
    )
    .expect("fill form");
    page.click("#contact-form button[type=submit]").expect("submit");

    page.wait_for_text("#result", WAIT, |t| t == "Your Message Has Been Sent")
        .expect("Console relay accepts the message");
}
