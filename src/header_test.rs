use super::*;

#[derive(Default)]
struct FakeHeader {
    children: Vec<String>,
    opacity: Option<&'static str>,
    fail_append: bool,
}

impl HeaderHost for FakeHeader {
    fn append_html(&mut self, html: &str) -> Result<(), ToggleError> {
        if self.fail_append {
            return Err(ToggleError::Dom("insertAdjacentHTML threw".to_owned()));
        }
        self.children.push(html.to_owned());
        Ok(())
    }

    fn reveal(&mut self) -> Result<(), ToggleError> {
        self.opacity = Some("1");
        Ok(())
    }
}

#[test]
fn mount_appends_button_and_reveals() {
    let mut header = FakeHeader { children: vec!["<a>search</a>".to_owned()], ..FakeHeader::default() };
    assert!(mount(&mut header, &ToggleConfig::default()).is_ok());
    assert_eq!(header.children.len(), 2);
    assert_eq!(header.children[0], "<a>search</a>");
    assert!(header.children[1].contains("Toggle dark mode"));
    assert_eq!(header.opacity, Some("1"));
}

#[test]
fn failed_append_keeps_header_hidden() {
    let mut header = FakeHeader { fail_append: true, ..FakeHeader::default() };
    let result = mount(&mut header, &ToggleConfig::default());
    assert!(matches!(result, Err(ToggleError::Dom(_))));
    assert_eq!(header.opacity, None);
}
