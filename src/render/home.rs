//! Landing page renderer
//!
//! Builds the complete home page document: hero, service cards,
//! testimonials and the contact form, in catalog order.

use super::escape_html;
use crate::content::{ContentStore, ServiceOffering, Testimonial};

/// Render the landing page for the given content store.
///
/// Deterministic for a fixed store; empty sequences render as empty
/// sections rather than failing.
#[allow(clippy::too_many_lines)]
pub fn render_home(content: &ContentStore) -> String {
    let mut page = String::with_capacity(16 * 1024);

    page.push_str(
        r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Consultório de Psicologia</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
            color: #2d3436;
            background: #fdfcfb;
        }
        .navbar {
            position: sticky;
            top: 0;
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 16px 40px;
            background: #ffffff;
            box-shadow: 0 1px 6px rgba(0, 0, 0, 0.08);
        }
        .navbar .brand {
            font-size: 1.3em;
            font-weight: 700;
            color: #6c5ce7;
        }
        .navbar nav a {
            margin-left: 24px;
            color: #2d3436;
            text-decoration: none;
        }
        .navbar nav a:hover {
            color: #6c5ce7;
        }
        .hero {
            text-align: center;
            padding: 90px 20px;
            background: linear-gradient(135deg, #a29bfe 0%, #6c5ce7 100%);
            color: white;
        }
        .hero h1 {
            font-size: 2.6em;
            margin-bottom: 16px;
        }
        .hero p {
            font-size: 1.2em;
            opacity: 0.92;
        }
        .btn {
            display: inline-block;
            margin-top: 28px;
            padding: 14px 32px;
            border: none;
            border-radius: 30px;
            background: #00b894;
            color: white;
            font-size: 1em;
            font-weight: 600;
            text-decoration: none;
            cursor: pointer;
        }
        .btn:hover {
            background: #019875;
        }
        section {
            max-width: 1000px;
            margin: 0 auto;
            padding: 60px 20px;
        }
        section h2 {
            text-align: center;
            font-size: 2em;
            margin-bottom: 40px;
            color: #2d3436;
        }
        .cards {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
            gap: 24px;
        }
        .card {
            padding: 28px;
            background: #ffffff;
            border-radius: 12px;
            box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
        }
        .card h3 {
            margin-bottom: 12px;
            color: #6c5ce7;
        }
        .card .meta {
            display: flex;
            justify-content: space-between;
            margin-top: 16px;
            font-weight: 600;
        }
        .card .price {
            color: #00b894;
        }
        .stars {
            color: #fdcb6e;
            font-size: 1.2em;
            margin-bottom: 10px;
        }
        .quote {
            font-style: italic;
            margin-bottom: 12px;
        }
        .author {
            font-weight: 600;
            color: #6c5ce7;
        }
        form {
            max-width: 560px;
            margin: 0 auto;
            display: grid;
            gap: 14px;
        }
        input, textarea {
            padding: 12px;
            border: 1px solid #dfe6e9;
            border-radius: 8px;
            font-size: 1em;
            font-family: inherit;
        }
        textarea {
            min-height: 120px;
            resize: vertical;
        }
        footer {
            text-align: center;
            padding: 24px;
            background: #2d3436;
            color: #dfe6e9;
            font-size: 0.9em;
        }
    </style>
</head>
<body>
    <header class="navbar">
        <span class="brand">Consultório de Psicologia</span>
        <nav>
            <a href="#services">Serviços</a>
            <a href="#testimonials">Depoimentos</a>
            <a href="#contact">Contato</a>
            <a href="/schedule">Agendar</a>
        </nav>
    </header>

    <section class="hero">
        <h1>Um espaço seguro para o seu bem-estar</h1>
        <p>Atendimento psicológico humanizado, presencial e online.</p>
        <a class="btn" href="/schedule">Agendar uma sessão</a>
    </section>

    <section id="services">
        <h2>Serviços</h2>
        <div class="cards">
"##,
    );

    for service in content.services() {
        push_service_card(&mut page, service);
    }

    page.push_str(
        r#"        </div>
    </section>

    <section id="testimonials">
        <h2>Depoimentos</h2>
        <div class="cards">
"#,
    );

    for testimonial in content.testimonials() {
        push_testimonial_card(&mut page, testimonial);
    }

    page.push_str(
        r#"        </div>
    </section>

    <section id="contact">
        <h2>Contato</h2>
        <form id="contact-form" method="post" action="/contact">
            <input type="text" name="name" placeholder="Nome">
            <input type="email" name="email" placeholder="E-mail">
            <input type="tel" name="phone" placeholder="Telefone">
            <textarea name="message" placeholder="Mensagem"></textarea>
            <button class="btn" type="submit">Enviar mensagem</button>
        </form>
    </section>

    <footer>
        <p>Consultório de Psicologia — atendimento com ética e acolhimento.</p>
    </footer>
</body>
</html>
"#,
    );

    page
}

/// Append one service card
fn push_service_card(page: &mut String, service: &ServiceOffering) {
    page.push_str("            <div class=\"card\">\n");
    page.push_str(&format!(
        "                <h3>{}</h3>\n",
        escape_html(&service.title)
    ));
    page.push_str(&format!(
        "                <p>{}</p>\n",
        escape_html(&service.description)
    ));
    page.push_str("                <div class=\"meta\">\n");
    page.push_str(&format!(
        "                    <span class=\"duration\">{}</span>\n",
        escape_html(&service.duration)
    ));
    page.push_str(&format!(
        "                    <span class=\"price\">{}</span>\n",
        escape_html(&service.price)
    ));
    page.push_str("                </div>\n");
    page.push_str("            </div>\n");
}

/// Append one testimonial card with its star rating
fn push_testimonial_card(page: &mut String, testimonial: &Testimonial) {
    page.push_str("            <div class=\"card\">\n");
    page.push_str(&format!(
        "                <div class=\"stars\">{}</div>\n",
        "★".repeat(usize::from(testimonial.rating))
    ));
    page.push_str(&format!(
        "                <p class=\"quote\">{}</p>\n",
        escape_html(&testimonial.text)
    ));
    page.push_str(&format!(
        "                <span class=\"author\">{}</span>\n",
        escape_html(&testimonial.name)
    ));
    page.push_str("            </div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentStore, ServiceOffering, Testimonial};

    fn service(title: &str) -> ServiceOffering {
        ServiceOffering {
            title: title.to_string(),
            description: format!("{title} description"),
            duration: "50 minutos".to_string(),
            price: "R$ 100".to_string(),
        }
    }

    fn testimonial(name: &str, rating: u8) -> Testimonial {
        Testimonial {
            name: name.to_string(),
            text: format!("{name} text"),
            rating,
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let store = ContentStore::new();
        assert_eq!(render_home(&store), render_home(&store));
    }

    #[test]
    fn test_renders_every_catalog_entry() {
        let store = ContentStore::new();
        let page = render_home(&store);
        for s in store.services() {
            assert!(page.contains(&escape_html(&s.title)));
            assert!(page.contains(&escape_html(&s.price)));
        }
        for t in store.testimonials() {
            assert!(page.contains(&escape_html(&t.name)));
        }
    }

    #[test]
    fn test_services_keep_input_order() {
        let store = ContentStore::from_parts(
            vec![service("Zebra"), service("Alfa"), service("Meio")],
            vec![testimonial("Primeiro", 5), testimonial("Segundo", 4)],
        );
        let page = render_home(&store);

        let zebra = page.find("Zebra").unwrap();
        let alfa = page.find("Alfa").unwrap();
        let meio = page.find("Meio").unwrap();
        assert!(zebra < alfa && alfa < meio);

        let primeiro = page.find("Primeiro").unwrap();
        let segundo = page.find("Segundo").unwrap();
        assert!(primeiro < segundo);
    }

    #[test]
    fn test_empty_store_still_renders() {
        let store = ContentStore::from_parts(vec![], vec![]);
        let page = render_home(&store);
        assert!(page.contains("<!DOCTYPE html>"));
        assert!(page.contains("id=\"services\""));
        assert!(page.contains("id=\"testimonials\""));
        assert!(!page.contains("class=\"card\""));
    }

    #[test]
    fn test_user_content_is_escaped() {
        let store = ContentStore::from_parts(
            vec![service("<b>bold</b>")],
            vec![testimonial("A & B", 3)],
        );
        let page = render_home(&store);
        assert!(!page.contains("<b>bold</b>"));
        assert!(page.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(page.contains("A &amp; B"));
    }

    #[test]
    fn test_star_rating_repeats() {
        let store = ContentStore::from_parts(vec![], vec![testimonial("Três", 3)]);
        let page = render_home(&store);
        assert!(page.contains("★★★"));
        assert!(!page.contains("★★★★"));
    }

    #[test]
    fn test_contact_form_posts_to_contact_route() {
        let page = render_home(&ContentStore::new());
        assert!(page.contains("action=\"/contact\""));
        assert!(page.contains("name=\"email\""));
        assert!(page.contains("href=\"/schedule\""));
    }
}
