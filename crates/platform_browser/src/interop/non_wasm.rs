use super::*;

/// Keep-alive handle for a registered media query listener.
///
/// The host-target stub holds nothing; dropping it is a no-op.
#[derive(Debug)]
pub struct MediaWatch;

pub fn set_body_class(_class: &str, _present: bool) -> Result<(), String> {
    Ok(())
}

pub fn set_element_class(_id: &str, _class: &str, _present: bool) -> Result<(), String> {
    Ok(())
}

pub fn set_element_style(_id: &str, _property: &str, _value: Option<&str>) -> Result<(), String> {
    Ok(())
}

pub fn element_height(_id: &str) -> Result<i32, String> {
    Ok(0)
}

pub fn set_document_title(_title: &str) -> Result<(), String> {
    Ok(())
}

pub fn watch_media(_query: &str, _handler: Box<dyn Fn(bool)>) -> Result<MediaWatch, String> {
    Ok(MediaWatch)
}

pub fn current_breakpoint(
    _queries: &[(Breakpoint, &str)],
) -> Result<Option<Breakpoint>, String> {
    Ok(None)
}

pub fn on_element_attach(_id: &str, _handler: Box<dyn FnOnce()>) -> Result<(), String> {
    Ok(())
}
