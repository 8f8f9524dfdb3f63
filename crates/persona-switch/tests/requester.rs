//! Requester tests against an in-process provider that records every
//! request and answers with a scripted reply.

use std::{
    error::Error as _,
    future::Future,
    pin::Pin,
    sync::Mutex,
};

use persona_switch::{
    Persona, Requester,
    error::{Result, SwitchError},
    generic::{GenericChatCompletionResponse, GenericMessage, GenericRole},
    model::{Model, OpenAiModel},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

enum Reply {
    Text(&'static str),
    Empty,
    Fail(&'static str),
}

struct ScriptedProvider {
    reply: Reply,
    seen: Mutex<Vec<ChatCompleteParameters<GenericMessage>>>,
}

impl ScriptedProvider {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<ChatCompleteParameters<GenericMessage>> {
        self.seen.lock().unwrap().clone()
    }
}

impl ChatCompletionProvider for ScriptedProvider {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let recorded = ChatCompleteParameters {
            model: params.model(),
            temperature: params.temperature,
            messages: params.into_messages().into_iter().map(Into::into).collect(),
        };
        self.seen.lock().unwrap().push(recorded);

        let outcome = match self.reply {
            Reply::Text(text) => Ok(GenericChatCompletionResponse {
                content: GenericMessage::new(text.to_owned(), GenericRole::Assistant),
                usage: None,
            }),
            Reply::Empty => Ok(GenericChatCompletionResponse {
                content: GenericMessage {
                    content: None,
                    role: GenericRole::Assistant,
                },
                usage: None,
            }),
            Reply::Fail(detail) => Err(SwitchError::Backend(detail.into())),
        };

        Box::pin(async move { outcome })
    }
}

fn instruction(persona: Persona) -> &'static str {
    persona.definition().system_instruction
}

#[tokio::test]
async fn coach_round_trip_returns_reply_unchanged() {
    let requester = Requester::new(ScriptedProvider::new(Reply::Text("Try X.")));

    let answer = requester.complete("How do I start?", "A").await.unwrap();
    assert_eq!(answer, "Try X.");

    let requests = requester.backend().requests();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.model, Model::OpenAi(OpenAiModel::Gpt4oMini));
    assert_eq!(request.temperature, Some(0.7));
    assert_eq!(
        request.messages,
        vec![
            GenericMessage::new(instruction(Persona::CareerCoach).into(), GenericRole::System),
            GenericMessage::new("How do I start?".into(), GenericRole::User),
        ]
    );
}

#[tokio::test]
async fn switching_persona_changes_only_the_instruction() {
    let requester = Requester::new(ScriptedProvider::new(Reply::Text("ok")));
    let text = "  Keep THIS exactly\n";

    requester.complete(text, "A").await.unwrap();
    requester.complete(text, "B").await.unwrap();

    let requests = requester.backend().requests();
    let (a, b) = (&requests[0].messages, &requests[1].messages);

    assert_eq!(b[0].text(), instruction(Persona::AiEngineer));
    assert_ne!(a[0].text(), b[0].text());
    assert_eq!(a[1], b[1]);
    assert_eq!(b[1].text(), text);
}

#[tokio::test]
async fn unknown_persona_uses_default_without_failing() {
    let requester = Requester::new(ScriptedProvider::new(Reply::Text("fine")));

    let answer = requester.complete("hi", "Z").await.unwrap();
    assert_eq!(answer, "fine");

    let requests = requester.backend().requests();
    assert_eq!(requests[0].messages[0].text(), instruction(Persona::DEFAULT));
}

#[tokio::test]
async fn backend_failure_surfaces_original_detail() {
    let requester = Requester::new(ScriptedProvider::new(Reply::Fail("429 rate limited")));

    let failure = requester.complete("hi", "B").await.unwrap_err();

    assert!(failure.to_string().contains("429 rate limited"));
    let source = failure
        .source()
        .and_then(|s| s.downcast_ref::<SwitchError>())
        .expect("source is the backend error");
    assert!(matches!(source, SwitchError::Backend(_)));
}

#[tokio::test]
async fn reply_without_text_is_a_failure() {
    let requester = Requester::new(ScriptedProvider::new(Reply::Empty));

    let failure = requester.complete("hi", "A").await.unwrap_err();

    assert!(failure.to_string().contains("no text content"));
}

#[tokio::test]
async fn each_call_sends_a_fresh_two_message_request() {
    let requester = Requester::new(ScriptedProvider::new(Reply::Text("ok")));

    requester.complete("first", "A").await.unwrap();
    requester.clone().complete("second", "A").await.unwrap();

    let requests = requester.backend().requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.messages.len() == 2));
    assert_eq!(requests[1].messages[1].text(), "second");
}
