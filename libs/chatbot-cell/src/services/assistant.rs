use crate::models::ChatReply;

/// Canned assistant replies keyed on message keywords. There is no external
/// AI service behind this; it routes patients to the right part of the site.
pub fn reply_to(message: &str) -> ChatReply {
    let normalized = message.trim().to_lowercase();

    if normalized.contains("emergency") || normalized.contains("urgent") {
        return ChatReply {
            reply: "If this is a medical emergency, please call your local emergency number \
                    immediately. For urgent medical questions you can book an emergency \
                    consultation and a doctor will contact you right away."
                .to_string(),
            suggestions: vec!["Book an emergency consultation".to_string()],
        };
    }

    if normalized.contains("appointment") || normalized.contains("book") {
        return ChatReply {
            reply: "You can book an appointment from the booking page. Pick a doctor, a date \
                    and a time slot, and you will receive a confirmation by email and SMS."
                .to_string(),
            suggestions: vec![
                "Book an appointment".to_string(),
                "See available doctors".to_string(),
            ],
        };
    }

    if normalized.contains("consultation") || normalized.contains("doctor online") {
        return ChatReply {
            reply: "Online consultations come in three types: instant, scheduled and emergency. \
                    Prices are shown on the consultation page before you confirm."
                .to_string(),
            suggestions: vec![
                "Request a consultation".to_string(),
                "View consultation prices".to_string(),
            ],
        };
    }

    if normalized.contains("report") || normalized.contains("result") {
        return ChatReply {
            reply: "Your medical reports are available under My Reports once you are logged in."
                .to_string(),
            suggestions: vec!["View my reports".to_string()],
        };
    }

    if normalized.contains("price") || normalized.contains("cost") || normalized.contains("fee") {
        return ChatReply {
            reply: "Consultation prices depend on the type: scheduled consultations are the most \
                    affordable, instant consultations cost a little more, and emergency \
                    consultations are priced highest. The consultation page shows the exact \
                    amounts."
                .to_string(),
            suggestions: vec!["View consultation prices".to_string()],
        };
    }

    if normalized.contains("hello") || normalized.contains("hi ") || normalized == "hi" {
        return ChatReply {
            reply: "Hello! I can help you with appointments, online consultations and medical \
                    reports. What do you need?"
                .to_string(),
            suggestions: vec![
                "Book an appointment".to_string(),
                "Request a consultation".to_string(),
                "View my reports".to_string(),
            ],
        };
    }

    ChatReply {
        reply: "I can help with booking appointments, online consultations and medical reports. \
                Could you tell me a bit more about what you are looking for?"
            .to_string(),
        suggestions: vec![
            "Book an appointment".to_string(),
            "Request a consultation".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emergency_takes_priority_over_booking_keywords() {
        let reply = reply_to("I need an urgent appointment");
        assert!(reply.reply.contains("emergency"));
    }

    #[test]
    fn appointment_questions_route_to_booking() {
        let reply = reply_to("How do I book an appointment?");
        assert!(reply.reply.contains("booking page"));
        assert!(reply.suggestions.contains(&"Book an appointment".to_string()));
    }

    #[test]
    fn pricing_questions_mention_the_three_types() {
        let reply = reply_to("what does a consultation cost?");
        assert!(reply.reply.contains("consultation"));
    }

    #[test]
    fn unknown_input_gets_the_fallback() {
        let reply = reply_to("asdfghjkl");
        assert!(reply.reply.contains("Could you tell me a bit more"));
        assert!(!reply.suggestions.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let greeting = reply_to("HELLO there");
        assert!(greeting.reply.starts_with("Hello!"));
    }
}
