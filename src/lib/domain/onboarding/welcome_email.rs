//! Welcome email content builder.
//!
//! Pure string renderers: no network, no file I/O. Both variants carry the
//! same information; the HTML version only adds presentation.

use crate::domain::{onboarding::members::Member, plans::PlanTier};

/// Path appended to the application base URL for the login CTA.
const LOGIN_PATH: &str = "/login";

/// Derives the login URL from the application base URL.
///
/// Trailing slashes are trimmed first, so `https://cube-ai.fr` and
/// `https://cube-ai.fr/` produce the same link.
pub fn login_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), LOGIN_PATH)
}

/// The welcome email sent after registration, with login details and the
/// benefits of the subscribed plan.
#[derive(Debug)]
pub struct WelcomeEmail {
    /// Recipient display name
    pub to_name: String,

    /// Username of the freshly created account
    pub account_username: String,

    /// Password of the freshly created account, in clear text.
    ///
    /// One-time bootstrap email; no redaction.
    pub account_password: String,

    /// The resolved subscription plan
    pub plan: &'static PlanTier,

    /// Login link derived from the application base URL
    pub login_url: String,

    /// Household member credentials, rendered in input order
    pub members: Vec<Member>,

    /// Registration identifier, rendered only when present
    pub registration_id: Option<String>,
}

impl WelcomeEmail {
    /// Fixed subject line.
    pub const SUBJECT: &'static str = "Bienvenue sur CubeAI — Vos accès et avantages";

    /// Creates a new `WelcomeEmail`, resolving the plan identifier.
    pub fn new(
        to_name: &str,
        account_username: &str,
        account_password: &str,
        plan: &str,
        base_url: &str,
        members: Vec<Member>,
        registration_id: Option<String>,
    ) -> Self {
        Self {
            to_name: to_name.to_string(),
            account_username: account_username.to_string(),
            account_password: account_password.to_string(),
            plan: PlanTier::resolve(plan),
            login_url: login_url(base_url),
            members,
            registration_id,
        }
    }

    /// Renders the plain text version of the email.
    pub fn render_plain(&self) -> String {
        let mut lines = vec![
            format!("Bienvenue {}", self.to_name),
            String::new(),
            "Votre inscription est confirmée.".to_string(),
        ];

        if let Some(registration_id) = &self.registration_id {
            lines.push(format!("ID d'inscription: {registration_id}"));
            lines.push(String::new());
        }

        lines.extend([
            "Voici vos informations de connexion et un récapitulatif de votre offre.".to_string(),
            String::new(),
            "Identifiants:".to_string(),
            format!("  • Identifiant: {}", self.account_username),
            format!("  • Mot de passe: {}", self.account_password),
            String::new(),
            format!(
                "Offre: {} — {} {}",
                self.plan.label, self.plan.price, self.plan.period
            ),
            "Avantages:".to_string(),
        ]);

        lines.extend(self.plan.features.iter().map(|feature| format!("  • {feature}")));

        if !self.members.is_empty() {
            lines.push(String::new());
            lines.push("Identifiants des membres:".to_string());
            lines.extend(self.members.iter().map(|member| {
                format!(
                    "  • {} ({}) — {} / {}",
                    member.full_name(),
                    member.user_type,
                    member.login_identifier(),
                    member.password
                )
            }));
        }

        lines.extend([
            String::new(),
            format!("Se connecter: {}", self.login_url),
            String::new(),
            "Besoin d'aide ? Répondez à ce message ou contactez notre support.".to_string(),
            String::new(),
            "— CubeAI - Équipe".to_string(),
        ]);

        lines.join("\n")
    }

    /// Renders the HTML version of the email.
    ///
    /// Styles are inlined for mail-client compatibility.
    pub fn render_html(&self) -> String {
        let features_html: String = self
            .plan
            .features
            .iter()
            .map(|feature| format!("<li style='margin:6px 0;color:#111827;'>{feature}</li>"))
            .collect();

        let registration_block = match &self.registration_id {
            Some(registration_id) => format!(
                "<p style='margin:0 0 8px 0;color:#6b7280;font-size:12px;'>ID d'inscription: <strong style='color:#111827;'>{registration_id}</strong></p>"
            ),
            None => String::new(),
        };

        format!(
            r#"<!doctype html>
<html>
  <head>
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Bienvenue sur CubeAI</title>
  </head>
  <body style="margin:0;padding:0;background:#f3f4f6;font-family:Arial,'Helvetica Neue',Helvetica,sans-serif;color:#111827;">
    <div style="max-width:640px;margin:0 auto;padding:24px;">
      <div style="background:#ffffff;border-radius:16px;padding:24px;">
        <div style="text-align:center;margin-bottom:8px;">
          <div style="display:inline-flex;align-items:center;gap:12px;">
            <div style="width:36px;height:36px;border-radius:8px;background:linear-gradient(90deg,#2563eb,#7c3aed);display:flex;align-items:center;justify-content:center;color:#fff;font-weight:800;font-family:Arial,sans-serif;">C</div>
            <div style="font-size:18px;font-weight:700;color:#111827;">CubeAI</div>
          </div>
        </div>

        <h1 style="font-size:22px;line-height:28px;margin:0 0 8px 0;color:#111827;">Bienvenue {to_name} 👋</h1>
        <p style="margin:0 0 6px 0;color:#374151;">Votre inscription est confirmée 🎉</p>
        {registration_block}
        <p style="margin:0 0 16px 0;color:#374151;">Voici vos informations de connexion et un récapitulatif de votre offre.</p>

        <div style="background:#f9fafb;border-radius:12px;padding:16px;margin-bottom:16px;">
          <div style="font-weight:700;color:#111827;margin-bottom:8px;">Vos identifiants</div>
          <div style="margin:4px 0;color:#111827;"><span style="color:#6b7280;">Identifiant:</span> {account_username}</div>
          <div style="margin:4px 0;color:#111827;"><span style="color:#6b7280;">Mot de passe:</span> {account_password}</div>
        </div>

        <div style="background:#f9fafb;border-radius:12px;padding:16px;margin-bottom:16px;">
          <div style="font-weight:700;color:#111827;margin-bottom:8px;">Votre offre</div>
          <div style="margin:4px 0;color:#111827;">Plan: <strong>{plan_label}</strong> — <span style="color:#111827;font-weight:700;">{plan_price}</span> <span style="color:#6b7280;">{plan_period}</span></div>
          <ul style="padding-left:18px;margin:8px 0 0 0;">{features_html}</ul>
        </div>

        {members_section}

        <div style="text-align:center;margin:24px 0;">
          <a href="{login_url}"
             style="display:inline-block;background:linear-gradient(90deg,#2563eb,#7c3aed);color:#ffffff;text-decoration:none;padding:12px 20px;border-radius:12px;font-weight:700;">
            Se connecter à CubeAI
          </a>
        </div>

        <p style="margin:0 0 8px 0;color:#374151;">Besoin d'aide ? Répondez à ce message ou contactez notre support.</p>
        <p style="margin:0;color:#6b7280;font-size:12px;">Cet email a été envoyé par CubeAI - Équipe &lt;hello@cube-ai.fr&gt;.</p>
      </div>

      <p style="text-align:center;color:#9ca3af;font-size:12px;margin-top:12px;">© 2024 CubeAI — Tous droits réservés.</p>
    </div>
  </body>
</html>
"#,
            to_name = self.to_name,
            registration_block = registration_block,
            account_username = self.account_username,
            account_password = self.account_password,
            plan_label = self.plan.label,
            plan_price = self.plan.price,
            plan_period = self.plan.period,
            features_html = features_html,
            members_section = self.render_members_table(),
            login_url = self.login_url,
        )
    }

    fn render_members_table(&self) -> String {
        if self.members.is_empty() {
            return String::new();
        }

        let rows: String = self
            .members
            .iter()
            .map(|member| {
                format!(
                    "<tr>\
                     <td style='padding:8px 12px;border-bottom:1px solid #e5e7eb;color:#111827;'>{full_name}</td>\
                     <td style='padding:8px 12px;border-bottom:1px solid #e5e7eb;color:#111827;'><code>{identifier}</code></td>\
                     <td style='padding:8px 12px;border-bottom:1px solid #e5e7eb;color:#111827;'><code>{password}</code></td>\
                     <td style='padding:8px 12px;border-bottom:1px solid #e5e7eb;color:#374151;'>{role}</td>\
                     </tr>",
                    full_name = member.full_name(),
                    identifier = member.login_identifier(),
                    password = member.password,
                    role = member.user_type,
                )
            })
            .collect();

        format!(
            "<div style=\"background:#f9fafb;border-radius:12px;padding:16px;margin-bottom:16px;\">\
             <div style=\"font-weight:700;color:#111827;margin-bottom:8px;\">Identifiants des membres</div>\
             <table style=\"width:100%;border-collapse:collapse;\">\
             <thead><tr>\
             <th align='left' style=\"padding:6px 12px;color:#6b7280;font-size:12px;font-weight:700;\">Membre</th>\
             <th align='left' style=\"padding:6px 12px;color:#6b7280;font-size:12px;font-weight:700;\">Identifiant</th>\
             <th align='left' style=\"padding:6px 12px;color:#6b7280;font-size:12px;font-weight:700;\">Mot de passe</th>\
             <th align='left' style=\"padding:6px 12px;color:#6b7280;font-size:12px;font-weight:700;\">Rôle</th>\
             </tr></thead><tbody>{rows}</tbody></table></div>"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_with(members: Vec<Member>, registration_id: Option<String>) -> WelcomeEmail {
        WelcomeEmail::new(
            "Jean Dupont",
            "jean.dupont",
            "TempPass123",
            "PRO",
            "https://cube-ai.fr",
            members,
            registration_id,
        )
    }

    #[test]
    fn test_login_url_trims_trailing_slash() {
        assert_eq!("https://cube-ai.fr/login", login_url("https://cube-ai.fr/"));
        assert_eq!("https://cube-ai.fr/login", login_url("https://cube-ai.fr"));
    }

    #[test]
    fn test_both_renderings_contain_the_credentials_verbatim() {
        let email = email_with(vec![], None);

        for body in [email.render_plain(), email.render_html()] {
            assert!(body.contains("jean.dupont"));
            assert!(body.contains("TempPass123"));
        }
    }

    #[test]
    fn test_both_renderings_contain_the_plan_details() {
        let email = email_with(vec![], None);

        for body in [email.render_plain(), email.render_html()] {
            assert!(body.contains("Pro"));
            assert!(body.contains("29,99€"));
            for feature in email.plan.features {
                assert!(body.contains(feature));
            }
        }
    }

    #[test]
    fn test_registration_id_absent_by_default() {
        let email = email_with(vec![], None);

        assert!(!email.render_plain().contains("ID d'inscription"));
        assert!(!email.render_html().contains("ID d'inscription"));
    }

    #[test]
    fn test_registration_id_rendered_when_supplied() {
        let email = email_with(vec![], Some("REG-42".to_string()));

        assert!(email.render_plain().contains("ID d'inscription: REG-42"));
        assert!(email.render_html().contains("REG-42"));
    }

    #[test]
    fn test_no_member_section_without_members() {
        let email = email_with(vec![], None);

        assert!(!email.render_plain().contains("Identifiants des membres"));
        assert!(!email.render_html().contains("Identifiants des membres"));
    }

    #[test]
    fn test_member_rows_render_in_input_order() {
        let members = Member::parse_list(
            r#"[
                {"firstName":"Zoé","lastName":"Dupont","sessionId":"zoe01","password":"pw1","userType":"CHILD"},
                {"firstName":"Ana","lastName":"Dupont","username":"ana.d","password":"pw2","userType":"CHILD"}
            ]"#,
        )
        .unwrap();
        let email = email_with(members, None);

        let plain = email.render_plain();
        assert!(plain.contains("Identifiants des membres"));
        assert!(plain.find("Zoé Dupont").unwrap() < plain.find("Ana Dupont").unwrap());
        assert!(plain.contains("zoe01 / pw1"));
        assert!(plain.contains("ana.d / pw2"));

        let html = email.render_html();
        assert_eq!(2, html.matches("<tr><td").count());
        assert!(html.find("zoe01").unwrap() < html.find("ana.d").unwrap());
    }

    #[test]
    fn test_unknown_plan_renders_the_starter_tier() {
        let email = WelcomeEmail::new(
            "Jean",
            "jean",
            "pw",
            "GOLD",
            "https://cube-ai.fr",
            vec![],
            None,
        );

        assert!(email.render_plain().contains("Offre: Starter"));
    }
}
