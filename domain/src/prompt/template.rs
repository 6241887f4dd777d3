//! Prompt templates for the generate / review cycle

use crate::game::{GameContext, GameRules};
use crate::generation::FIXER_OK_SENTINEL;
use serde_json::Value;

/// Highest number of university-level questions allowed in one round.
pub const MAX_HARD_QUESTIONS: usize = 3;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the generator
    pub fn generation_system() -> &'static str {
        r#"Eres un autor de preguntas para un concurso de televisión tipo Pasalacabra (es-ES).
Escribes definiciones claras y breves, cada una con una única respuesta posible.
Respondes siempre con JSON válido y nada más."#
    }

    /// User prompt asking for a complete daily set
    pub fn generation_prompt(ctx: &GameContext, rules: &GameRules) -> String {
        let count = rules.question_count();
        let letters = rules.alphabet.joined();
        let first = rules
            .alphabet
            .letters()
            .first()
            .map(String::as_str)
            .unwrap_or("A");
        let starts = rules.prefixes.render_starts_with("X");
        let contains = rules.prefixes.render_contains("X");

        format!(
            r#"Genera un set diario de Pasalacabra en español (es-ES).

REQUISITOS:
- Devuelve SOLO JSON válido (sin Markdown, sin comentarios).
- Debe haber exactamente {count} preguntas, una por letra.
- Letras exactas y en este orden: [{letters}]
- Formato EXACTO por entrada:
  {{ "letter": "{first}", "question": "{example} ...", "answer": "..." }}
- Usa solo estos prefijos:
  - "{starts}"  (y la respuesta DEBE empezar por X)
  - "{contains}"  (y la respuesta DEBE contener X)
- La respuesta NO debe aparecer dentro de la pregunta.
- Cada pregunta debe tener UNA única respuesta inequívoca.
- Respuestas cortas (ideal 1-3 palabras), con tildes correctas si aplican.
- Respuestas de palabras en español.
- No repitas respuestas entre letras.

TEMAS (usa SOLO estos):
- {topics}

DIFICULTAD:
- Mezcla fácil y media.
- Como máximo {max_hard} preguntas difíciles (nivel universitario).

METADATOS:
- id: "{id}"
- title: "{title}"
- questions: array con las {count} entradas.

Devuelve un objeto JSON con:
{{
  "id": "{id}",
  "title": "...",
  "questions": [ ... ]
}}"#,
            example = rules.prefixes.render_starts_with(first),
            topics = ctx.topics_joined(),
            max_hard = MAX_HARD_QUESTIONS,
            id = rules.set_id,
            title = ctx.title(),
        )
    }

    /// System prompt for the reviewer / fixer
    pub fn review_system() -> &'static str {
        r#"Eres un editor y validador de preguntas tipo Pasalacabra (es-ES).
Revisas con rigor: ambigüedades, errores factuales, respuestas contenidas en la pregunta
y prefijos incorrectos. Nunca añades explicaciones a tu respuesta."#
    }

    /// User prompt asking to review a candidate and either accept or fix it
    pub fn review_prompt(ctx: &GameContext, rules: &GameRules, candidate: &Value) -> String {
        let topics = ctx.topics_joined();

        format!(
            r#"Tu tarea con este JSON:
1) Detecta errores semánticos o ambigüedades (solo una respuesta posible).
2) Verifica que la respuesta NO esté contenida en la pregunta.
3) Verifica que la letra y el prefijo ("{starts_with}"/"{contains}") sean correctos.
4) Verifica que todas las preguntas sean SOLO de estos temas: {topics}.
5) Verifica la mezcla de dificultad con como máximo {max_hard} preguntas difíciles (nivel universitario).
6) Respuestas cortas (ideal 1-3 palabras), con tildes correctas.
7) Respuestas de palabras en español.

Si TODO está bien: responde exactamente con "{ok}" (sin comillas, sin texto extra).
Si hay CUALQUIER problema: devuelve SOLO el JSON corregido completo (sin Markdown, sin explicación),
manteniendo:
- id = "{id}"
- title = "{title}"
- mismas letras y orden exacto: [{letters}]
- mismas reglas de letras/prefijos
- temas SOLO dentro de: {topics}

JSON a revisar:
{candidate}"#,
            starts_with = rules.prefixes.starts_with,
            contains = rules.prefixes.contains,
            max_hard = MAX_HARD_QUESTIONS,
            ok = FIXER_OK_SENTINEL,
            id = rules.set_id,
            title = ctx.title(),
            letters = rules.alphabet.joined(),
        )
    }
}
