/*!
 * Prompt templates for meeting summarization.
 *
 * The templates are fixed Italian instructions mandating a markdown-only,
 * five-section summary structure. The transcript is inserted as plain text
 * into a single placeholder; it is never parsed back, so no escaping is
 * required.
 */

/// Prompt template for meeting summarization.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The fixed system instruction: markdown only, no conversational
    /// preamble.
    pub const MEETING_SUMMARY_SYSTEM: &'static str = "Sei un assistente professionale che crea riassunti dettagliati di meeting. Rispondi SEMPRE e SOLO con il markdown formattato, senza introduzioni o convenevoli. Non dire mai frasi come 'Ecco il riassunto' o 'Certo, ecco fatto'. Inizia direttamente con il markdown.";

    /// The user prompt template. Placeholder: `{transcript}`.
    pub const MEETING_SUMMARY: &'static str = r#"Analizza questa trascrizione di un meeting e crea un riassunto professionale in formato Markdown.

IMPORTANTE:
- Rispondi SOLO con il Markdown formattato, senza introduzioni tipo "Ecco il riassunto" o "Certo, ecco fatto"
- NON includere la lista dei partecipanti
- Concentrati su un riassunto MOLTO dettagliato e approfondito
- Analizza tutti i punti discussi in modo esaustivo

Trascrizione:
{transcript}

Struttura la risposta ESATTAMENTE così (inizia direttamente con il markdown):

# Riassunto Meeting

## Riassunto Dettagliato

[Scrivi qui un riassunto molto dettagliato e approfondito di tutto ciò che è stato discusso nel meeting. Analizza ogni argomento in modo completo, includendo:
- Contesto e background delle discussioni
- Dettagli specifici di ogni topic affrontato
- Opinioni e posizioni espresse
- Decisioni prese e motivazioni
- Eventuali dibattiti o punti di vista diversi
- Numeri, dati e informazioni specifiche menzionate
Scrivi almeno 3-4 paragrafi ben strutturati]

## Punti Chiave

[Elenca i punti principali in modo dettagliato, non limitarti a titoli ma spiega ogni punto:
- **Punto 1**: Descrizione approfondita con contesto e dettagli
- **Punto 2**: Descrizione approfondita con contesto e dettagli
- etc.]

## Decisioni e Azioni

[Se presenti, elenca decisioni prese e azioni da intraprendere con:
- Cosa va fatto
- Chi è responsabile (se menzionato)
- Eventuali scadenze (se menzionate)
- Contesto e motivazione della decisione]

## Prossimi Passi

[Se discussi, indica i prossimi passi concordati o suggeriti durante il meeting]"#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the default meeting summary template.
    pub fn meeting_summary() -> Self {
        Self::new(Self::MEETING_SUMMARY)
    }

    /// Render the template with the transcript interpolated verbatim.
    pub fn render(&self, transcript: &str) -> String {
        self.template.replace("{transcript}", transcript)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::meeting_summary()
    }
}
