use notification_cell::{EmailMessage, SmsMessage};

use crate::models::Appointment;

/// Render the confirmation email for a booked appointment.
pub fn confirmation_email(appointment: &Appointment) -> EmailMessage {
    let subject = format!("Appointment Confirmed - {}", appointment.date);

    let html_body = format!(
        "<h2>Appointment Confirmed</h2>\
         <p>Dear {name},</p>\
         <p>Your appointment has been booked.</p>\
         <ul>\
           <li><strong>Doctor:</strong> {doctor}</li>\
           <li><strong>Date:</strong> {date}</li>\
           <li><strong>Time:</strong> {time_slot}</li>\
         </ul>\
         <p>Please arrive 10 minutes early. Reply to this email if you need to make changes.</p>\
         <p>HealthConnect+</p>",
        name = appointment.name,
        doctor = appointment.doctor,
        date = appointment.date,
        time_slot = appointment.time_slot,
    );

    EmailMessage {
        to: appointment.email.clone(),
        subject,
        html_body,
    }
}

/// Render the confirmation SMS for a booked appointment.
pub fn confirmation_sms(appointment: &Appointment) -> SmsMessage {
    SmsMessage {
        to: appointment.phone.clone(),
        body: format!(
            "HealthConnect+: appointment with {} confirmed for {} at {}.",
            appointment.doctor, appointment.date, appointment.time_slot
        ),
    }
}
