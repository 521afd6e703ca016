//! TwiML rendering of call-flow descriptors
//!
//! The state machine never sees markup; this module turns its
//! provider-agnostic [`Descriptor`] into the XML the telephony provider
//! executes.

use crate::state_machine::{Descriptor, GatherSpec, Segment};
use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;
use std::io::{self, Cursor};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write TwiML: {0}")]
    Write(#[from] io::Error),
    #[error("TwiML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders descriptors with a fixed `<Say>` voice
#[derive(Debug, Clone)]
pub struct TwimlRenderer {
    voice: String,
}

impl TwimlRenderer {
    pub fn new(voice: impl Into<String>) -> Self {
        Self {
            voice: voice.into(),
        }
    }

    pub fn render(&self, descriptor: &Descriptor) -> Result<String, RenderError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 4);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        writer
            .create_element("Response")
            .write_inner_content(|w| {
                for segment in &descriptor.segments {
                    self.write_segment(w, segment)?;
                }
                if let Some(gather) = &descriptor.gather {
                    self.write_gather(w, gather)?;
                }
                if let Some(target) = descriptor.redirect {
                    w.create_element("Redirect")
                        .with_attribute(("method", "POST"))
                        .write_text_content(BytesText::new(target.path()))?;
                }
                if descriptor.terminate {
                    w.create_element("Hangup").write_empty()?;
                }
                Ok(())
            })?;

        Ok(String::from_utf8(writer.into_inner().into_inner())?)
    }

    fn write_segment<W: io::Write>(&self, w: &mut Writer<W>, segment: &Segment) -> io::Result<()> {
        match segment {
            Segment::Say { text } => self.write_say(w, text),
            Segment::Pause { seconds } => {
                w.create_element("Pause")
                    .with_attribute(("length", seconds.to_string().as_str()))
                    .write_empty()?;
                Ok(())
            }
        }
    }

    fn write_say<W: io::Write>(&self, w: &mut Writer<W>, text: &str) -> io::Result<()> {
        w.create_element("Say")
            .with_attribute(("voice", self.voice.as_str()))
            .write_text_content(BytesText::new(text))?;
        Ok(())
    }

    fn write_gather<W: io::Write>(&self, w: &mut Writer<W>, gather: &GatherSpec) -> io::Result<()> {
        let num_digits = gather.num_digits.to_string();
        let timeout = gather.timeout_secs.to_string();
        let finish_on_key = gather.finish_on_key.to_string();

        let element = w
            .create_element("Gather")
            .with_attribute(("action", gather.action.path()))
            .with_attribute(("method", "POST"))
            .with_attribute(("numDigits", num_digits.as_str()))
            .with_attribute(("timeout", timeout.as_str()))
            .with_attribute(("finishOnKey", finish_on_key.as_str()));

        if gather.prompt.is_empty() {
            element.write_empty()?;
        } else {
            element.write_inner_content(|w| {
                gather.prompt.iter().try_for_each(|text| self.write_say(w, text))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_machine::Endpoint;

    fn renderer() -> TwimlRenderer {
        TwimlRenderer::new("Polly.Aditi")
    }

    fn menu_gather(prompt: &str) -> GatherSpec {
        GatherSpec {
            action: Endpoint::HandleMenu,
            num_digits: 1,
            timeout_secs: 10,
            finish_on_key: '#',
            prompt: vec![prompt.to_string()],
        }
    }

    #[test]
    fn test_renders_gather_with_fallback_redirect() {
        let xml = renderer()
            .render(&Descriptor::gather(vec![], menu_gather("Press 1.")))
            .unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(
            r##"<Gather action="/handle-menu" method="POST" numDigits="1" timeout="10" finishOnKey="#">"##
        ));
        assert!(xml.contains(r#"<Say voice="Polly.Aditi">Press 1.</Say>"#));
        assert!(xml.contains(r#"<Redirect method="POST">/voice</Redirect>"#));
        assert!(!xml.contains("<Hangup/>"));

        let gather_at = xml.find("<Gather").unwrap();
        let redirect_at = xml.find("<Redirect").unwrap();
        assert!(gather_at < redirect_at);
    }

    #[test]
    fn test_renders_segments_before_gather() {
        let descriptor = Descriptor::gather(
            vec![Segment::say("Status: Confirmed."), Segment::pause()],
            menu_gather("Press 2."),
        );
        let xml = renderer().render(&descriptor).unwrap();

        let say_at = xml.find("Status: Confirmed.").unwrap();
        let pause_at = xml.find(r#"<Pause length="1"/>"#).unwrap();
        let gather_at = xml.find("<Gather").unwrap();
        assert!(say_at < pause_at && pause_at < gather_at);
    }

    #[test]
    fn test_renders_hangup() {
        let xml = renderer()
            .render(&Descriptor::hangup(vec![Segment::say("Goodbye!")]))
            .unwrap();

        assert!(xml.contains(r#"<Say voice="Polly.Aditi">Goodbye!</Say>"#));
        assert!(xml.contains("<Hangup/>"));
        assert!(!xml.contains("<Gather"));
        assert!(!xml.contains("<Redirect"));
    }

    #[test]
    fn test_escapes_spoken_text() {
        let xml = renderer()
            .render(&Descriptor::redirect(
                vec![Segment::say("Coach <A1> & \"B2\"")],
                Endpoint::Voice,
            ))
            .unwrap();

        assert!(xml.contains("Coach &lt;A1&gt; &amp;"));
        assert!(!xml.contains("<A1>"));
    }

    #[test]
    fn test_voice_is_configurable() {
        let xml = TwimlRenderer::new("en-IN-NeerjaNeural")
            .render(&Descriptor::hangup(vec![Segment::say("Bye")]))
            .unwrap();
        assert!(xml.contains(r#"<Say voice="en-IN-NeerjaNeural">Bye</Say>"#));
    }
}
