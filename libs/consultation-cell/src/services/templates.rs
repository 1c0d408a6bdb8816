use notification_cell::{EmailMessage, SmsMessage};

use crate::models::{Consultation, ConsultationType};

fn type_label(consultation_type: ConsultationType) -> &'static str {
    match consultation_type {
        ConsultationType::Instant => "Instant consultation",
        ConsultationType::Scheduled => "Scheduled consultation",
        ConsultationType::Emergency => "Emergency consultation",
    }
}

/// Render the confirmation email for a booked consultation.
pub fn confirmation_email(consultation: &Consultation) -> EmailMessage {
    let subject = format!("Consultation Request Received - {}", consultation.consultation_id);

    let preferred_date_row = match &consultation.preferred_date {
        Some(date) => format!("<li><strong>Preferred date:</strong> {}</li>", date),
        None => String::new(),
    };

    let html_body = format!(
        "<h2>Consultation Request Received</h2>\
         <p>Dear {name},</p>\
         <p>We have received your consultation request. A doctor will contact you shortly.</p>\
         <ul>\
           <li><strong>Reference:</strong> {reference}</li>\
           <li><strong>Type:</strong> {label}</li>\
           <li><strong>Amount:</strong> {amount}</li>\
           {preferred_date_row}\
         </ul>\
         <p>Keep the reference number handy when contacting support.</p>\
         <p>HealthConnect+</p>",
        name = consultation.patient_name,
        reference = consultation.consultation_id,
        label = type_label(consultation.consultation_type),
        amount = consultation.amount,
        preferred_date_row = preferred_date_row,
    );

    EmailMessage {
        to: consultation.patient_email.clone(),
        subject,
        html_body,
    }
}

/// Render the confirmation SMS for a booked consultation.
pub fn confirmation_sms(consultation: &Consultation) -> SmsMessage {
    SmsMessage {
        to: consultation.patient_phone.clone(),
        body: format!(
            "HealthConnect+: {} request {} received. A doctor will reach out shortly.",
            type_label(consultation.consultation_type),
            consultation.consultation_id
        ),
    }
}
