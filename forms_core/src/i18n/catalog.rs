//! Static message catalogs, one per endpoint and language.
//!
//! The wording is part of the public contract of the API and is kept
//! verbatim, including punctuation differences between the two
//! endpoints (the contact catalog ends its sentences with periods,
//! the signup catalog mostly does not).

use super::Lang;

#[derive(Debug, Clone, Copy)]
pub struct ContactMessages {
    pub name_required: &'static str,
    pub name_min: &'static str,
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub message_required: &'static str,
    pub message_min: &'static str,
    pub validation_error: &'static str,
    pub server_error: &'static str,
    pub success: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SignupMessages {
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub name_required: &'static str,
    pub skills_min: &'static str,
    pub skills_max: &'static str,
    pub validation_error: &'static str,
    pub server_error: &'static str,
    pub success: &'static str,
}

static CONTACT_FR: ContactMessages = ContactMessages {
    name_required: "Veuillez entrer votre nom.",
    name_min: "Le nom doit contenir au moins 2 caractères.",
    email_required: "L'adresse email est requise.",
    email_invalid: "Veuillez entrer une adresse email valide.",
    message_required: "Veuillez entrer un message.",
    message_min: "Le message doit contenir au moins 10 caractères.",
    validation_error: "Veuillez corriger les erreurs ci-dessous.",
    server_error: "Une erreur est survenue. Veuillez réessayer.",
    success: "Message envoyé ! Nous vous répondrons dans les 24 heures.",
};

static CONTACT_EN: ContactMessages = ContactMessages {
    name_required: "Please enter your name.",
    name_min: "Name must be at least 2 characters.",
    email_required: "Please enter your email.",
    email_invalid: "Please enter a valid email address.",
    message_required: "Please enter a message.",
    message_min: "Message must be at least 10 characters.",
    validation_error: "Please fix the errors below.",
    server_error: "Something went wrong. Please try again.",
    success: "Message sent! We'll respond within 24 hours.",
};

static SIGNUP_FR: SignupMessages = SignupMessages {
    email_required: "L'adresse email est requise",
    email_invalid: "Veuillez entrer une adresse email valide",
    name_required: "Le prénom est requis",
    skills_min: "Sélectionnez au moins 1 compétence",
    skills_max: "Vous pouvez sélectionner 5 compétences maximum",
    validation_error: "Veuillez corriger les erreurs ci-dessous",
    server_error: "Une erreur est survenue. Veuillez réessayer.",
    success: "Inscription réussie ! Vous recevrez un email de confirmation.",
};

static SIGNUP_EN: SignupMessages = SignupMessages {
    email_required: "Email address is required",
    email_invalid: "Please enter a valid email address",
    name_required: "First name is required",
    skills_min: "Select at least 1 skill",
    skills_max: "You can select up to 5 skills",
    validation_error: "Please fix the errors below",
    server_error: "An error occurred. Please try again.",
    success: "Signup successful! You'll receive a confirmation email.",
};

pub fn contact_messages(lang: Lang) -> &'static ContactMessages {
    match lang {
        Lang::Fr => &CONTACT_FR,
        Lang::En => &CONTACT_EN,
    }
}

pub fn signup_messages(lang: Lang) -> &'static SignupMessages {
    match lang {
        Lang::Fr => &SIGNUP_FR,
        Lang::En => &SIGNUP_EN,
    }
}
