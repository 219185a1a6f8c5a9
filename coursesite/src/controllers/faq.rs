use minijinja::context;
use serde::Serialize;

use super::{Page, Renderer};

/// One FAQ entry. Answers may contain trusted inline HTML.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const QUESTIONS: &[Question] = &[
    Question {
        question: "Is there a free version?",
        answer: "Yes! We offer a free trial for 30 days on any paid plans.",
    },
    Question {
        question: "What are your support hours?",
        answer: "We have support staff answering emails 24/7, though response times may be a bit slower on weekends.",
    },
    Question {
        question: "How do I contact support?",
        answer: r#"Email us - <a href="mailto:support@lenslocked.com">support@lenslocked.com</a>"#,
    },
    Question {
        question: "Where is your office?",
        answer: "Our entire team is remote!",
    },
];

/// FAQ page listing every entry in [`QUESTIONS`].
pub fn faq(renderer: impl Renderer) -> Page {
    let data = context! { questions => QUESTIONS };
    Page::with_data(renderer, move |_| data.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{parse_fs, MemoryFragments};
    use axum::http::{Request, StatusCode};

    #[tokio::test]
    async fn test_faq_lists_questions_with_html_answers() {
        let source = MemoryFragments::new().with(
            "faq.html",
            "{% for qa in questions %}<dt>{{ qa.question }}</dt><dd>{{ qa.answer|safe }}</dd>{% endfor %}",
        );
        let page = faq(parse_fs(&source, &["faq.html"]).unwrap());

        let (parts, _) = Request::builder().uri("/faq").body(()).unwrap().into_parts();
        let response = page.respond(&parts);
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        for qa in QUESTIONS {
            assert!(html.contains(qa.question), "missing {}", qa.question);
        }
        assert!(html.contains(r#"<a href="mailto:support@lenslocked.com">"#));
    }
}
