//! Terminal rendering of documents, suggestions and stats.

use chrono::{DateTime, Utc};
use serde::Serialize;

use docsearch::format::{format_file_size, topic_preview};
use docsearch::model::{DocumentStats, FacetCount, SearchStats};
use docsearch::Document;

const TOPIC_PREVIEW_LIMIT: usize = 3;

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Failed to encode output: {}", e),
    }
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn documents(documents: &[Document], json: bool) {
    if json {
        print_json(documents);
        return;
    }
    if documents.is_empty() {
        println!("No documents found");
        return;
    }

    for doc in documents {
        let mut meta = vec![
            doc.file_type.to_string(),
            format_file_size(doc.file_size),
            format_date(doc.uploaded_at),
        ];
        if let Some(team) = doc.team_label() {
            meta.push(team.to_string());
        }
        println!("{} [{}] {}", doc.file_type.icon(), doc.id, doc.title);
        println!("    {}", meta.join(" · "));

        let topics = topic_preview(&doc.topics, TOPIC_PREVIEW_LIMIT);
        if !topics.is_empty() {
            println!("    {}", topics.join(", "));
        }
    }
    println!("{} document(s)", documents.len());
}

pub fn document_detail(doc: &Document, json: bool) {
    if json {
        print_json(doc);
        return;
    }

    println!("{} {}", doc.file_type.icon(), doc.title);
    println!("  id:        {}", doc.id);
    if let Some(name) = doc.original_filename() {
        println!("  file:      {}", name);
    }
    println!("  type:      {}", doc.file_type);
    println!("  size:      {}", format_file_size(doc.file_size));
    println!("  status:    {}", doc.status);
    println!("  uploaded:  {}", format_date(doc.uploaded_at));
    if let Some(by) = &doc.uploaded_by_name {
        println!("  by:        {}", by);
    }
    if let Some(team) = doc.team_label() {
        println!("  team:      {}", team);
    }
    if let Some(project) = doc.project_label() {
        println!("  project:   {}", project);
    }
    if !doc.topics.is_empty() {
        let names: Vec<&str> = doc.topics.iter().map(|t| t.name.as_str()).collect();
        println!("  topics:    {}", names.join(", "));
    }
    if let Some(description) = doc.description.as_deref().filter(|d| !d.is_empty()) {
        println!();
        println!("{}", description);
    }
}

pub fn suggestions(suggestions: &[String], json: bool) {
    if json {
        print_json(suggestions);
        return;
    }
    for suggestion in suggestions {
        println!("{}", suggestion);
    }
}

fn facets(title: &str, counts: &[FacetCount]) {
    if counts.is_empty() {
        return;
    }
    println!("{}:", title);
    for facet in counts {
        let label = facet
            .label
            .clone()
            .or_else(|| facet.id.map(|id| id.to_string()))
            .unwrap_or_else(|| "(none)".to_string());
        println!("  {:<24} {}", label, facet.count);
    }
}

#[derive(Serialize)]
struct StatsOutput<'a> {
    documents: Option<&'a DocumentStats>,
    search: Option<&'a SearchStats>,
}

pub fn stats(documents: Option<&DocumentStats>, search: Option<&SearchStats>, json: bool) {
    if json {
        print_json(&StatsOutput { documents, search });
        return;
    }

    match documents {
        Some(stats) => {
            println!("Documents: {}", stats.total_documents);
            println!("Total size: {} MB", stats.total_size_mb);
            facets("By file type", &stats.by_file_type);
            facets("By team", &stats.by_team);
            facets("By status", &stats.by_status);
        }
        None => println!("Document stats unavailable"),
    }

    match search {
        Some(stats) => {
            println!(
                "Searchable: {} of {}",
                stats.searchable_documents, stats.total_documents
            );
            if let Some(engine) = &stats.search_engine {
                println!("Engine: {}", engine);
            }
        }
        None => println!("Search stats unavailable"),
    }
}
