//! Locale-specific response rendering
//!
//! Pure mapping from turn outcomes to utterance strings. Swapping the locale
//! never touches the dialogue machine.

use crate::dialogue::TurnOutcome;

/// Renders abstract turn outcomes into spoken replies for one locale
pub trait ResponseFormatter {
    fn render(&self, outcome: &TurnOutcome) -> String;
}

/// es-MX phrasing, the product's primary voice
pub struct SpanishFormatter;

impl ResponseFormatter for SpanishFormatter {
    fn render(&self, outcome: &TurnOutcome) -> String {
        match outcome {
            TurnOutcome::ConfirmRequest { amount, handle } => format!(
                "¿Confirmas enviar {} lumens a {}? Di sí o no.",
                amount, handle
            ),
            TurnOutcome::AskRecipient { amount } => {
                format!("¿A quién quieres enviar los {} lumens?", amount)
            }
            TurnOutcome::AskAmount { handle } => {
                format!("¿Cuántos lumens quieres enviar a {}?", handle)
            }
            TurnOutcome::RecipientRetry { amount, sample } => {
                if sample.is_empty() {
                    format!(
                        "No encontré ese contacto y tu directorio está vacío. \
                         Siguen pendientes {} lumens.",
                        amount
                    )
                } else {
                    format!(
                        "No encontré ese contacto. Tienes {} lumens pendientes; \
                         puedes decir: {}.",
                        amount,
                        sample.join(", ")
                    )
                }
            }
            TurnOutcome::Finalized { instruction } => format!(
                "Enviando {} lumens a {}.",
                instruction.amount, instruction.recipient_handle
            ),
            TurnOutcome::Cancelled => "Cancelado. ¿Algo más?".to_string(),
            TurnOutcome::Farewell => "Hasta luego.".to_string(),
            TurnOutcome::ContactList { handles } => {
                if handles.is_empty() {
                    "No tienes contactos disponibles.".to_string()
                } else {
                    format!("Tus contactos son: {}.", handles.join(", "))
                }
            }
            TurnOutcome::Unrecognized => {
                "No entendí. Prueba: envía 10 lumens a ana.".to_string()
            }
            TurnOutcome::PaymentSettled { ok, detail } => {
                if *ok {
                    format!("Listo. {}", detail)
                } else {
                    format!("La transferencia falló. {}", detail)
                }
            }
        }
    }
}

/// English phrasing; command verbs are bilingual either way
pub struct EnglishFormatter;

impl ResponseFormatter for EnglishFormatter {
    fn render(&self, outcome: &TurnOutcome) -> String {
        match outcome {
            TurnOutcome::ConfirmRequest { amount, handle } => format!(
                "Send {} lumens to {}? Say yes or no.",
                amount, handle
            ),
            TurnOutcome::AskRecipient { amount } => {
                format!("Who should receive the {} lumens?", amount)
            }
            TurnOutcome::AskAmount { handle } => {
                format!("How many lumens should go to {}?", handle)
            }
            TurnOutcome::RecipientRetry { amount, sample } => {
                if sample.is_empty() {
                    format!(
                        "I couldn't find that contact and your directory is empty. \
                         {} lumens are still pending.",
                        amount
                    )
                } else {
                    format!(
                        "I couldn't find that contact. {} lumens pending; \
                         you can say: {}.",
                        amount,
                        sample.join(", ")
                    )
                }
            }
            TurnOutcome::Finalized { instruction } => format!(
                "Sending {} lumens to {}.",
                instruction.amount, instruction.recipient_handle
            ),
            TurnOutcome::Cancelled => "Cancelled. Anything else?".to_string(),
            TurnOutcome::Farewell => "Goodbye.".to_string(),
            TurnOutcome::ContactList { handles } => {
                if handles.is_empty() {
                    "You have no contacts available.".to_string()
                } else {
                    format!("Your contacts are: {}.", handles.join(", "))
                }
            }
            TurnOutcome::Unrecognized => {
                "I didn't catch that. Try: send 10 lumens to ana.".to_string()
            }
            TurnOutcome::PaymentSettled { ok, detail } => {
                if *ok {
                    format!("Done. {}", detail)
                } else {
                    format!("The transfer failed. {}", detail)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TransferInstruction;

    #[test]
    fn confirm_request_mentions_amount_and_handle() {
        let out = TurnOutcome::ConfirmRequest {
            amount: 10.0,
            handle: "ana@x.com".into(),
        };
        let text = SpanishFormatter.render(&out);
        assert!(text.contains("10"));
        assert!(text.contains("ana@x.com"));
    }

    #[test]
    fn empty_contact_list_says_none_available() {
        let out = TurnOutcome::ContactList { handles: vec![] };
        assert_eq!(
            SpanishFormatter.render(&out),
            "No tienes contactos disponibles."
        );
    }

    #[test]
    fn whole_amounts_render_without_decimals() {
        let out = TurnOutcome::Finalized {
            instruction: TransferInstruction {
                amount: 10.0,
                recipient_handle: "ana@x.com".into(),
                recipient_address: "ADDR1".into(),
            },
        };
        assert_eq!(
            SpanishFormatter.render(&out),
            "Enviando 10 lumens a ana@x.com."
        );
    }

    #[test]
    fn locales_render_the_same_outcome_independently() {
        let out = TurnOutcome::Cancelled;
        assert_eq!(SpanishFormatter.render(&out), "Cancelado. ¿Algo más?");
        assert_eq!(EnglishFormatter.render(&out), "Cancelled. Anything else?");
    }
}
