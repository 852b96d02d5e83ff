//! Italian localization of fixed UI strings and known data values.
//!
//! Lookups are by exact key; unknown text is returned unchanged. The
//! presentation layer is the only caller, record values stay raw.

use std::collections::HashMap;
use std::sync::LazyLock;

static ITALIAN: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Header
        ("Wholesale Product Catalog", "Catalogo Prodotti all'Ingrosso da Amedeo"),
        (
            "Browse our selection of premium Italian products",
            "Sfoglia la nostra selezione di prodotti italiani premium",
        ),
        (
            "Premium Italian wholesale products from Abruzzo",
            "Prodotti all'ingrosso premium dall'Abruzzo e dintorni",
        ),
        (
            "Wholesale Abruzzo - Premium Italian Products",
            "Ingrosso Abruzzo - Prodotti Italiani Premium",
        ),
        // Filters
        ("Filters", "Filtri"),
        ("Search products...", "Cerca prodotti..."),
        ("All Categories", "Tutte le Categorie"),
        ("All Customer Types", "Tutti i Tipi di Cliente"),
        ("Clear Filters", "Cancella Filtri"),
        ("Products", "Prodotti"),
        ("Category", "Categoria"),
        ("Customer type", "Tipo di cliente"),
        ("Search", "Cerca"),
        // Product cards
        ("No image available", "Immagine non disponibile"),
        ("No description available", "Descrizione non disponibile"),
        ("Code", "Codice"),
        ("Size", "Formato"),
        ("Aging", "Stagionatura"),
        ("Expires", "Scadenza"),
        // Empty states
        ("Loading product catalog...", "Caricamento catalogo prodotti..."),
        ("No products match your search", "Nessun prodotto corrisponde alla tua ricerca"),
        (
            "Try adjusting your filters or search term",
            "Prova a modificare i filtri o i termini di ricerca",
        ),
        ("Clear All Filters", "Cancella Tutti i Filtri"),
        ("The catalog could not be loaded.", "Impossibile caricare il catalogo."),
        // Menu
        ("File", "File"),
        ("Open CSV…", "Apri CSV…"),
        ("Reload", "Ricarica"),
        ("Export visible as JSON…", "Esporta visibili come JSON…"),
        ("Price chart", "Grafico prezzi"),
        ("Price (€)", "Prezzo (€)"),
        // Categories
        ("Spirits", "Alcolici"),
        ("Carne", "Carne"),
        ("Formaggi", "Formaggi"),
        ("Latticini", "Latticini"),
        ("Riso", "Riso"),
        ("Miele", "Miele"),
        ("Sale", "Sale"),
        ("Salumi", "Salumi"),
        ("Olio", "Olio"),
        ("Aceto", "Aceto"),
        // Customer types
        ("Restaurants", "Ristoranti"),
        ("Bars", "Bar"),
        ("Specialty Butchers", "Macellerie Specializzate"),
        ("Specialty Cheese Shops", "Negozi Specializzati di Formaggio"),
        ("Retail", "Vendita al Dettaglio"),
        ("Specialty Food Stores", "Negozi di Alimentari Specializzati"),
        ("Pizzerias", "Pizzerie"),
        ("Catering", "Catering"),
        ("Bakeries", "Panetterie"),
        // Combined customer types as they appear in the data
        ("Restaurants, Bars", "Ristoranti, Bar"),
        ("Restaurants, Specialty Butchers", "Ristoranti, Macellerie Specializzate"),
        (
            "Restaurants, Specialty Cheese Shops",
            "Ristoranti, Negozi Specializzati di Formaggio",
        ),
        (
            "Restaurants, Specialty Cheese Shops, Retail",
            "Ristoranti, Negozi Specializzati di Formaggio, Vendita al Dettaglio",
        ),
        (
            "Restaurants, Specialty Food Stores",
            "Ristoranti, Negozi di Alimentari Specializzati",
        ),
        (
            "Restaurants, Specialty Food Stores, Catering",
            "Ristoranti, Negozi di Alimentari Specializzati, Catering",
        ),
        ("Restaurants, Pizzerias, Retail", "Ristoranti, Pizzerie, Vendita al Dettaglio"),
        (
            "Specialty Food Stores, Retail",
            "Negozi di Alimentari Specializzati, Vendita al Dettaglio",
        ),
        (
            "Restaurants, Specialty Food Stores, Bakeries",
            "Ristoranti, Negozi di Alimentari Specializzati, Panetterie",
        ),
    ])
});

/// Italian rendering of `text`, or `text` itself when there is no entry.
pub fn translate(text: &str) -> &str {
    ITALIAN.get(text).copied().unwrap_or(text)
}

/// Display language of the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Italian,
}

impl Language {
    /// Localize a fixed string or a known data value.
    pub fn tr<'a>(self, text: &'a str) -> &'a str {
        match self {
            Language::English => text,
            Language::Italian => translate(text),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Italian => "Italiano",
        }
    }
}
