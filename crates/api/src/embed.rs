//! Per-page carousel bootstrap snippet.
//!
//! The snippet is injected into a page's rendered markup. It must be safe
//! to include more than once (an element flag guards double-initialization)
//! and safe to run at any point during page load (initialization is
//! deferred until `DOMContentLoaded` when the document is still loading).

use heroslide_core::types::DbId;

/// Build the initialization script for one page's slider.
///
/// Looks up `#slider-{page_id}` and constructs `new Swiper(el, options)`
/// with the serialized options object when the Swiper library is present.
pub fn init_snippet(page_id: DbId, options_json: &str) -> String {
    format!(
        r#"(function(){{
  function initSlider_{page_id}(){{
    var el = document.getElementById('slider-{page_id}');
    if (!el || el.__swiperInit) return;
    el.__swiperInit = true;
    var options = {options_json};
    if (window.Swiper) new Swiper(el, options);
  }}

  if (document.readyState === 'loading') {{
    document.addEventListener('DOMContentLoaded', initSlider_{page_id}, {{ once: true }});
  }} else {{
    initSlider_{page_id}();
  }}
}})();
"#
    )
}
