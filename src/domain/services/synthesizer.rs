//! Prompt synthesis, one rule per endpoint variant.

use tracing::debug;

use crate::domain::{
    BundlePayload, ChatPayload, DomainError, EndpointRequest, ModelPrompt, ModelTurn,
};

pub fn synthesize(request: &EndpointRequest) -> Result<ModelPrompt, DomainError> {
    let prompt = match request {
        EndpointRequest::Chat(chat) => synthesize_chat(chat)?,
        EndpointRequest::Bundle(bundle) => synthesize_bundle(bundle),
    };

    debug!(
        endpoint = %request.endpoint(),
        instruction_len = prompt.instruction().len(),
        history_len = prompt.history().len(),
        "synthesized prompt"
    );

    Ok(prompt)
}

/// Build the chat instruction from the persona, mode, subject and final
/// message. Earlier messages travel as history with model-side roles.
pub fn synthesize_chat(chat: &ChatPayload) -> Result<ModelPrompt, DomainError> {
    let current = chat.current_turn().ok_or_else(|| {
        DomainError::validation("chat payload requires at least one message to answer")
    })?;

    let instruction = format!(
        "Act as {name} ({persona}). The mode is \"{mode}\". The subject is \"{subject}\". \
         The student says: \"{message}\". Reply concisely and directly.",
        name = chat.character.name,
        persona = chat.character.prompt,
        mode = chat.mode.label,
        subject = chat.subject,
        message = current.content,
    );

    let history = chat
        .history()
        .iter()
        .map(|m| ModelTurn::new(m.model_role(), m.content.as_str()))
        .collect();

    Ok(ModelPrompt::new(instruction).with_history(history))
}

pub fn synthesize_bundle(bundle: &BundlePayload) -> ModelPrompt {
    let mut instruction = format!(
        "Create a JSON study package for {subject}, grade {grade}, with the tutor {name}. \
         Write it in {name}'s voice and respond with JSON only.",
        subject = bundle.subject,
        grade = bundle.grade,
        name = bundle.character.name,
    );

    if let Some(schema) = &bundle.schema {
        instruction.push_str(" The JSON should follow this shape: ");
        instruction.push_str(&schema.to_string());
    }

    ModelPrompt::new(instruction)
}
