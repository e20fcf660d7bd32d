// Content store module
// Holds the static catalog of services and testimonials shown on the landing page

use serde::Serialize;

/// A therapy service offered by the practice
#[derive(Debug, Clone, Serialize)]
pub struct ServiceOffering {
    pub title: String,
    pub description: String,
    /// Session length, e.g. "50 minutos"
    pub duration: String,
    /// Formatted currency label, e.g. "R$ 150"
    pub price: String,
}

/// A client testimonial
#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
    /// Star rating, 1 to 5
    pub rating: u8,
}

/// Read-only landing page content.
///
/// Built once at startup and shared behind the application state.
/// Sequence order is display order, so the catalog below is authored
/// in the order it should appear on the page.
pub struct ContentStore {
    services: Vec<ServiceOffering>,
    testimonials: Vec<Testimonial>,
}

impl ContentStore {
    /// Build the fixed catalog
    #[allow(clippy::too_many_lines)]
    pub fn new() -> Self {
        let services = vec![
            ServiceOffering {
                title: "Terapia Individual".to_string(),
                description: "Sessões personalizadas para trabalhar questões específicas e promover autoconhecimento.".to_string(),
                duration: "50 minutos".to_string(),
                price: "R$ 150".to_string(),
            },
            ServiceOffering {
                title: "Terapia de Casal".to_string(),
                description: "Acompanhamento especializado para fortalecer relacionamentos e melhorar a comunicação.".to_string(),
                duration: "60 minutos".to_string(),
                price: "R$ 200".to_string(),
            },
            ServiceOffering {
                title: "Terapia Familiar".to_string(),
                description: "Trabalho terapêutico focado na dinâmica familiar e resolução de conflitos.".to_string(),
                duration: "60 minutos".to_string(),
                price: "R$ 180".to_string(),
            },
            ServiceOffering {
                title: "Orientação Vocacional".to_string(),
                description: "Processo de autoconhecimento para escolhas profissionais e de carreira.".to_string(),
                duration: "45 minutos".to_string(),
                price: "R$ 120".to_string(),
            },
        ];

        let testimonials = vec![
            Testimonial {
                name: "Maria Silva".to_string(),
                text: "A terapia mudou completamente minha perspectiva de vida. Sou muito grata pelo acolhimento e profissionalismo.".to_string(),
                rating: 5,
            },
            Testimonial {
                name: "João Santos".to_string(),
                text: "Encontrei um espaço seguro para trabalhar minhas questões. Recomendo de coração.".to_string(),
                rating: 5,
            },
            Testimonial {
                name: "Ana Costa".to_string(),
                text: "Profissional excepcional, com uma abordagem humanizada e eficaz. Muito obrigada!".to_string(),
                rating: 5,
            },
        ];

        Self {
            services,
            testimonials,
        }
    }

    /// Services in display order
    pub fn services(&self) -> &[ServiceOffering] {
        &self.services
    }

    /// Testimonials in display order
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Build a store from explicit sequences
    #[cfg(test)]
    pub fn from_parts(services: Vec<ServiceOffering>, testimonials: Vec<Testimonial>) -> Self {
        Self {
            services,
            testimonials,
        }
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_non_empty() {
        let store = ContentStore::new();
        assert!(!store.services().is_empty());
        assert!(!store.testimonials().is_empty());
    }

    #[test]
    fn test_catalog_order_is_authored_order() {
        let store = ContentStore::new();
        let titles: Vec<&str> = store.services().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Terapia Individual",
                "Terapia de Casal",
                "Terapia Familiar",
                "Orientação Vocacional"
            ]
        );

        let names: Vec<&str> = store
            .testimonials()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Maria Silva", "João Santos", "Ana Costa"]);
    }

    #[test]
    fn test_catalog_prices_are_formatted_labels() {
        let store = ContentStore::new();
        assert!(store.services().iter().all(|s| s.price.starts_with("R$ ")));
    }
}
