/* src/router/core/rust/src/error_view.rs */

use craft_markup::{bilingual, escape_html};

/// Static page shown when neither the requested route nor home could be
/// rendered. Buttons carry `data-action` for the host to wire up.
pub fn render_error_view(message: &str) -> String {
  format!(
    concat!(
      r#"<div class="error-page"><div class="error-content">"#,
      "{title}{apology}",
      r#"<p class="error-message">{message}</p>"#,
      r#"<div class="error-actions">"#,
      r#"<button class="btn btn-primary" data-action="reload">{reload}</button>"#,
      r#"<button class="btn btn-secondary" data-action="go-home">{home}</button>"#,
      "</div></div></div>",
    ),
    title = bilingual("h1", "页面加载失败", "Failed to load page"),
    apology = bilingual("p", "抱歉，页面加载时出现了问题。", "Sorry, something went wrong while loading."),
    message = escape_html(message),
    reload = bilingual("span", "刷新页面", "Reload"),
    home = bilingual("span", "返回首页", "Back to home"),
  )
}
