#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    TripInfo,
    Phone,
    WhatsApp,
    Unknown,
}

const GREETING_WORDS: &[&str] = &["hallo", "hey", "hoi"];
const TRIP_WORDS: &[&str] = &["rit", "prijs", "kilometer"];
const PHONE_WORDS: &[&str] = &["telefoon", "nummer", "bellen"];
const WHATSAPP_WORDS: &[&str] = &["whatsapp"];

// Checked in order, first hit wins.
const RULES: &[(Intent, &[&str])] = &[
    (Intent::Greeting, GREETING_WORDS),
    (Intent::TripInfo, TRIP_WORDS),
    (Intent::Phone, PHONE_WORDS),
    (Intent::WhatsApp, WHATSAPP_WORDS),
];

pub const PHONE_NUMBER: &str = "06 4001 4198";

pub fn detect_intent(msg: &str) -> Intent {
    let msg_lower = msg.to_lowercase();

    RULES
        .iter()
        .find(|(_, words)| words.iter().any(|w| msg_lower.contains(w)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Unknown)
}

pub fn generate_reply(user_msg: &str) -> String {
    use Intent::*;

    let intent = detect_intent(user_msg);
    tracing::debug!(?intent, "chat intent detected");

    match intent {
        Greeting => "Welkom bij TAXIUMS4! 🚕 Waar kan ik je mee helpen?".to_string(),

        TripInfo => "Ik kan je helpen de ritprijs te berekenen. \
             Klik twee punten op de kaart of vul de coördinaten in bij 'Rit berekenen'."
            .to_string(),

        Phone => format!("Je kunt TAXIUMS4 direct bellen op {PHONE_NUMBER} 📞"),

        WhatsApp => format!("Stuur ons gerust een WhatsApp op {PHONE_NUMBER} 📲"),

        Unknown => format!(
            "Je zei: '{}'. Ik ben de slimme TAXIUMS4-assistent. \
             Vraag me gerust iets over ritten, prijzen of hoe je ons kunt bereiken!",
            user_msg
        ),
    }
}
