// src/terminal.rs
//! Interactive terminal front end for the chat and summary flows.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::render::{
    ASSISTANT_NAME, DISCLAIMER, TYPING_INDICATOR, render_lookup_state, render_message,
};
use crate::services::backend_client::BackendClient;
use crate::services::chat_session::ChatSession;
use crate::services::summary_lookup::{LookupState, LookupVariant, SummaryLookup, SummaryView};

/// A line typed at the chat prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum ChatCommand<'a> {
    Quit,
    Reset,
    Phone(&'a str),
    Say(&'a str),
}

pub fn parse_chat_line(line: &str) -> ChatCommand<'_> {
    let line = line.trim();
    match line {
        "/quit" | "/exit" => ChatCommand::Quit,
        "/reset" => ChatCommand::Reset,
        _ => match line.strip_prefix("/phone") {
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                ChatCommand::Phone(rest.trim())
            }
            _ => ChatCommand::Say(line),
        },
    }
}

fn prompt(label: &str) {
    print!("{}", label);
    let _ = std::io::stdout().flush();
}

pub async fn run_chat(config: &Config, phone: Option<String>) -> Result<()> {
    let client = BackendClient::new(&config.backend_url, config.request_timeout)?;
    let mut chat = ChatSession::new(client);
    if let Some(phone) = phone {
        chat.set_phone_number(phone.trim());
    }

    println!("{} - Agente Virtual de Saúde", ASSISTANT_NAME);
    println!("{}", DISCLAIMER);
    println!("Comandos: /phone <número>, /reset, /quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if chat.phone_number().is_empty() {
        prompt("Telefone: ");
        if let Some(line) = lines.next_line().await? {
            chat.set_phone_number(line.trim());
        }
    }

    loop {
        prompt("> ");
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_chat_line(&line) {
            ChatCommand::Quit => break,
            ChatCommand::Reset => {
                chat.reset();
                println!("Conversa reiniciada.");
            }
            ChatCommand::Phone(phone) => {
                chat.set_phone_number(phone);
                println!("Telefone: {}", chat.phone_number());
            }
            ChatCommand::Say(text) => {
                chat.set_input(text);
                if chat.phone_number().trim().is_empty() {
                    println!("Informe o telefone com /phone <número> antes de enviar.");
                    continue;
                }
                if !chat.can_submit() {
                    continue;
                }
                println!("{}", TYPING_INDICATOR);
                let outcome = chat.submit_input().await;
                debug!(?outcome, "Chat exchange finished");
                if let Some(reply) = chat.messages().last() {
                    println!("{}", render_message(reply));
                }
            }
        }
    }

    Ok(())
}

pub async fn run_summary(
    config: &Config,
    variant: LookupVariant,
    identifier: &str,
    raw: bool,
) -> Result<()> {
    let base_url = match variant {
        LookupVariant::Relay => &config.relay_url,
        LookupVariant::ByConversationId | LookupVariant::ByPhoneNumber => &config.backend_url,
    };
    let client = BackendClient::new(base_url, config.request_timeout)?;
    let mut lookup = SummaryLookup::new(variant, client);

    println!("Buscando...");
    let state = lookup.search(identifier).await;
    if let Some(text) = render_lookup_state(state) {
        println!("{}", text);
    }
    if let (true, LookupState::Success(SummaryView::Triage(summary))) = (raw, state) {
        println!("\n{}", summary.markdown);
    }
    Ok(())
}
