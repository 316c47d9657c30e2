use scc_core::contact::ContactMessage;

pub fn mailto_url(recipient: &str, message: &ContactMessage) -> String {
    let body = format!(
        "From: {} <{}>\n\n{}",
        message.name, message.email, message.message
    );
    format!(
        "mailto:{}?subject={}&body={}",
        recipient.trim(),
        urlencoding::encode(&message.subject),
        urlencoding::encode(&body)
    )
}
