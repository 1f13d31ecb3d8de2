//! The photo capture form.
//!
//! The file input opens the camera on mobile (`capture="user"`) or a file
//! picker elsewhere. A short script turns the chosen file into a data URL
//! and submits it as the `image` field; without scripting the user can
//! paste a data URL into the textarea instead.

use crate::catalog::Icon;
use crate::ui::components::button::Button;
use crate::ui::kit::html::escape;
use crate::ui::kit::icons::icon;

/// Name of the form field carrying the data URL.
pub const IMAGE_FIELD: &str = "image";

const READ_FILE_SCRIPT: &str = r#"
document.getElementById('photo').addEventListener('change', function (event) {
  var file = event.target.files && event.target.files[0];
  if (!file) { return; }
  var reader = new FileReader();
  reader.onload = function () {
    var form = document.getElementById('capture-form');
    form.elements['image'].value = reader.result;
    form.submit();
  };
  reader.readAsDataURL(file);
});
"#;

pub fn capture_widget(action: &str, error: Option<&str>) -> String {
    let error = error
        .map(|e| format!(r#"<p class="error" role="alert">{}</p>"#, escape(e)))
        .unwrap_or_default();

    format!(
        r#"<form id="capture-form" class="capture-widget" method="post" action="{action}">
{error}
<label class="btn btn-primary" for="photo">{camera}<span>Take or Upload Photo</span></label>
<input id="photo" type="file" accept="image/*" capture="user" hidden>
<details>
<summary>Paste an image data URL instead</summary>
<textarea name="{IMAGE_FIELD}" placeholder="data:image/png;base64,..."></textarea>
{submit}
</details>
</form>
<script>{READ_FILE_SCRIPT}</script>"#,
        action = escape(action),
        camera = icon(Icon::Camera, ""),
        submit = Button::new("Use This Image").as_html(),
    )
}
