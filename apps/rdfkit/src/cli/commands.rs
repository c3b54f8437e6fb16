//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Each command returns the text to print; `main` owns stdout.

use crate::error::AppError;
use rdfkit_core::{Factory, GraphStore, RdfTerm, Term, Triple};
use serde_json::json;

// =============================================================================
// ARGUMENT MAPPING
// =============================================================================

/// Object argument of the `triple` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectArg {
    /// `_:name` or IRI text.
    Term(String),
    /// A literal with optional language tag or datatype IRI.
    Literal {
        lexical: String,
        lang: Option<String>,
        datatype: Option<String>,
    },
}

/// Map a node argument to a term: `_:name` is a named blank node, anything
/// else is IRI text (surrounding angle brackets are dropped).
pub fn parse_node_arg(factory: &Factory, arg: &str) -> Result<Term, AppError> {
    if let Some(name) = arg.strip_prefix("_:") {
        return Ok(factory.create_blank_node_named(name)?.into());
    }
    let iri = arg
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(arg);
    Ok(factory.create_iri(iri)?.into())
}

fn build_literal(
    factory: &Factory,
    lexical: &str,
    lang: Option<&str>,
    datatype: Option<&str>,
) -> Result<Term, AppError> {
    let literal = match (lang, datatype) {
        (Some(_), Some(_)) => {
            return Err(AppError::InvalidInput(
                "a literal takes a language tag or a datatype, not both".to_string(),
            ));
        }
        (Some(tag), None) => factory.create_literal_lang(lexical, tag)?,
        (None, Some(datatype)) => {
            factory.create_literal_typed(lexical, factory.create_iri(datatype)?)?
        }
        (None, None) => factory.create_literal(lexical),
    };
    Ok(literal.into())
}

/// Parse one `S P O` statement of the `graph` command.
///
/// A double-quoted object becomes a simple literal; quoted text cannot
/// contain whitespace since tokens are split on it.
pub fn parse_statement(factory: &Factory, statement: &str) -> Result<Triple, AppError> {
    let tokens: Vec<&str> = statement.split_whitespace().collect();
    let [subject, predicate, object] = tokens.as_slice() else {
        return Err(AppError::InvalidInput(format!(
            "expected 'S P O', got {} token(s) in {:?}",
            tokens.len(),
            statement
        )));
    };

    let object = match object
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(lexical) => factory.create_literal(lexical).into(),
        None => parse_node_arg(factory, object)?,
    };

    Ok(factory.create_triple(
        parse_node_arg(factory, subject)?,
        parse_node_arg(factory, predicate)?,
        object,
    )?)
}

fn term_json(term: &Term) -> serde_json::Value {
    json!({
        "ntriples": term.ntriples_string(),
        "term": term,
    })
}

fn render(value: &serde_json::Value) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

// =============================================================================
// TERM COMMANDS
// =============================================================================

/// Validate an IRI and print it.
pub fn cmd_iri(factory: &Factory, json_mode: bool, iri: &str) -> Result<String, AppError> {
    let term = Term::from(factory.create_iri(iri)?);
    tracing::debug!("Created IRI {}", term);

    if json_mode {
        return render(&term_json(&term));
    }
    Ok(term.ntriples_string())
}

/// Mint one blank node per name, or a single anonymous node.
pub fn cmd_bnode(
    factory: &Factory,
    json_mode: bool,
    names: &[String],
) -> Result<String, AppError> {
    let nodes: Vec<Term> = if names.is_empty() {
        vec![factory.create_blank_node().into()]
    } else {
        names
            .iter()
            .map(|name| -> Result<Term, AppError> {
                Ok(factory.create_blank_node_named(name)?.into())
            })
            .collect::<Result<_, AppError>>()?
    };
    tracing::debug!("Minted {} blank node(s)", nodes.len());

    if json_mode {
        let items: Vec<_> = nodes.iter().map(term_json).collect();
        return render(&json!(items));
    }
    Ok(nodes
        .iter()
        .map(|n| n.ntriples_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Build a literal and print it.
pub fn cmd_literal(
    factory: &Factory,
    json_mode: bool,
    lexical: &str,
    lang: Option<&str>,
    datatype: Option<&str>,
) -> Result<String, AppError> {
    let term = build_literal(factory, lexical, lang, datatype)?;
    tracing::debug!("Created literal {}", term);

    if json_mode {
        return render(&term_json(&term));
    }
    Ok(term.ntriples_string())
}

// =============================================================================
// TRIPLE & GRAPH COMMANDS
// =============================================================================

/// Build a single triple and print it as an N-Triples line.
pub fn cmd_triple(
    factory: &Factory,
    json_mode: bool,
    subject: &str,
    predicate: &str,
    object: ObjectArg,
) -> Result<String, AppError> {
    let object = match object {
        ObjectArg::Term(text) => parse_node_arg(factory, &text)?,
        ObjectArg::Literal {
            lexical,
            lang,
            datatype,
        } => build_literal(factory, &lexical, lang.as_deref(), datatype.as_deref())?,
    };
    let triple = factory.create_triple(
        parse_node_arg(factory, subject)?,
        parse_node_arg(factory, predicate)?,
        object,
    )?;
    tracing::debug!("Created triple {}", triple);

    if json_mode {
        return render(&json!({
            "ntriples": triple.to_string(),
            "triple": triple,
        }));
    }
    Ok(triple.to_string())
}

/// Add every statement to one fresh graph and print its distinct triples.
pub fn cmd_graph(
    factory: &Factory,
    json_mode: bool,
    statements: &[String],
) -> Result<String, AppError> {
    let mut graph = factory.create_graph();
    for statement in statements {
        let triple = parse_statement(factory, statement)?;
        if !graph.add(triple)? {
            tracing::info!("Duplicate statement ignored: {}", statement);
        }
    }
    let size = graph.size()?;
    tracing::debug!("Graph holds {} distinct triple(s)", size);

    let lines: Vec<String> = graph.iter().map(|t| t.to_string()).collect();
    if json_mode {
        return render(&json!({
            "size": size,
            "triples": lines,
        }));
    }

    let mut output = lines.join("\n");
    if !output.is_empty() {
        output.push('\n');
    }
    output.push_str(&format!("# {} distinct triple(s)", size));
    Ok(output)
}

/// Print the effective factory configuration as TOML-style keys.
pub fn cmd_config(factory: &Factory, json_mode: bool) -> Result<String, AppError> {
    let config = factory.config();
    if json_mode {
        return render(&serde_json::to_value(config)?);
    }
    Ok(format!(
        "allow_relative_iris = {}\nreject_colon_in_blank_node_names = {}",
        config.allow_relative_iris, config.reject_colon_in_blank_node_names
    ))
}
