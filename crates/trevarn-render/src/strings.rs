//! Per-language copy for the index page.

use trevarn_catalog::Language;

/// Literal strings that differ between the English and French index.
///
/// `hero_statement` carries trusted inline markup; everything else is plain
/// text authored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub page_title: &'static str,
    pub hero_label: &'static str,
    pub hero_statement: &'static str,
    pub hero_sub: &'static str,
    pub section_title: &'static str,
    pub sections_label: &'static str,
    pub lang_switch_href: &'static str,
    pub lang_switch_label: &'static str,
    pub pdf_title: &'static str,
    pub footer_month: &'static str,
}

const EN: Strings = Strings {
    page_title: "Trevarn — Brand Guidelines",
    hero_label: "Brand Guidelines",
    hero_statement: "Connected intelligence for the <strong>built environment</strong>. Rooted in Brittany. Built for global deployment.",
    hero_sub: "This site documents the complete Trevarn brand identity — from the etymology of the name to the specifications of every mark, colour, and typeface.",
    section_title: "Documentation",
    sections_label: "sections",
    lang_switch_href: "/FR/",
    lang_switch_label: "FR",
    pdf_title: "Download Brand Guidelines (PDF)",
    footer_month: "January",
};

const FR: Strings = Strings {
    page_title: "Trevarn — Charte Graphique",
    hero_label: "Charte Graphique",
    hero_statement: "Intelligence connectée pour <strong>l'environnement bâti</strong>. Enraciné en Bretagne. Conçu pour un déploiement mondial.",
    hero_sub: "Ce site documente l'identité de marque Trevarn dans son intégralité — de l'étymologie du nom aux spécifications de chaque marque, couleur et police.",
    section_title: "Documentation",
    sections_label: "sections",
    lang_switch_href: "/",
    lang_switch_label: "EN",
    pdf_title: "Télécharger le Guide de Marque (PDF)",
    footer_month: "Janvier",
};

impl Strings {
    pub fn for_language(lang: Language) -> &'static Strings {
        match lang {
            Language::En => &EN,
            Language::Fr => &FR,
        }
    }
}
