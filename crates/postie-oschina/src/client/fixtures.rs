//! Rendered page fixtures shared by client tests.

pub(crate) const DETAIL_PAGE: &str = r#"<!DOCTYPE html><html><body>
<form class="ui write-article form" method="post">
  <input name="title" type="text" value="Hello">
  <textarea name="body">World</textarea>
  <input name="origin_url" type="text" value="">
  <input name="privacy" type="checkbox" value="1">
  <input name="as_top" type="checkbox" value="0">
  <input name="deny_comment" type="checkbox" value="0">
  <input name="downloadImg" type="checkbox" value="0">
  <input name="type" type="radio" value="original">
  <input name="type" type="radio" value="article" checked>
  <select id="catalogDropdown">
    <option value="7">Notes</option>
    <option selected>Tutorials</option>
  </select>
</form>
</body></html>"#;

pub(crate) const WRITE_PAGE: &str = r#"<!DOCTYPE html><html><body>
<form class="ui write-article form">
  <select id="catalogDropdown">
    <option value="">Choose a category</option>
    <option value="7">Notes</option>
    <option value="42">Tutorials</option>
  </select>
</form>
</body></html>"#;
