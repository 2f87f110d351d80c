/// `onerror` attribute value for images carrying `data-candidates`
pub const ON_ERROR: &str = "imageFailed(this)";

/// Browser side of the image fallback chain, loaded in `<head>` so every image has its handler
/// from the moment it is parsed.
///
/// Each `error` advances `data-cursor` through `data-candidates` the same way
/// `ImageResolution::on_load_failure` does, and swaps in `data-fallback` text once the list is
/// exhausted (headshots only).
pub const FALLBACK_JS: &str = r#"
function imageFailed(img) {
  var candidates = JSON.parse(img.dataset.candidates || "[]");
  var cursor = Number(img.dataset.cursor || 0);
  if (cursor < candidates.length - 1) {
    img.dataset.cursor = cursor + 1;
    img.src = candidates[cursor + 1];
    return;
  }
  img.onerror = null;
  var text = img.dataset.fallback;
  if (text === undefined) return;
  var div = document.createElement("div");
  div.className = img.className + " fallback";
  div.setAttribute("aria-label", "Avatar fallback");
  div.textContent = text;
  img.replaceWith(div);
}
"#;
