use color_eyre::eyre::Result;
use reelvault_store::Catalog;

pub fn run_list(catalog: &Catalog, json: bool) -> Result<()> {
    let movies = catalog.list_movies()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&movies)?);
        return Ok(());
    }
    if movies.is_empty() {
        println!("The catalog is empty.");
        return Ok(());
    }
    for movie in &movies {
        let rating = match movie.rating_summary() {
            Some((average, count)) => format!("{:.1}/5 ({})", average, count),
            None => "unrated".to_string(),
        };
        println!(
            "{:<30} {:>6} views  {}  [{}]",
            movie.slug, movie.views, rating, movie.genre
        );
    }
    Ok(())
}

pub fn run_show(catalog: &Catalog, slug: &str, json: bool) -> Result<()> {
    let movie = catalog.movie_by_slug(slug)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&movie)?);
        return Ok(());
    }
    println!("{} ({})", movie.title, movie.year);
    println!("  slug:     {}", movie.slug);
    println!("  genre:    {}", movie.genre);
    println!("  views:    {}", movie.views);
    if let Some((average, count)) = movie.rating_summary() {
        println!("  rating:   {:.1}/5 from {} user(s)", average, count);
    }
    println!("  source:   {} ({})", movie.source, movie.source_type);
    println!("  download: {}", movie.download_url());
    if !movie.trailer.is_empty() {
        println!("  trailer:  {}", movie.trailer);
    }
    if !movie.description.is_empty() {
        println!("  {}", movie.description);
    }
    for comment in &movie.comments {
        println!("  > {}: {}", comment.user, comment.text);
    }
    Ok(())
}

pub fn run_view(catalog: &Catalog, slug: &str, json: bool) -> Result<()> {
    let views = catalog.record_view(slug)?;
    if json {
        println!("{}", serde_json::json!({ "ok": true, "views": views }));
    } else {
        println!("{} now has {} view(s)", slug, views);
    }
    Ok(())
}

pub fn run_rate(catalog: &Catalog, slug: &str, user: &str, rating: i64, json: bool) -> Result<()> {
    let summary = catalog.upsert_rating(slug, user, rating)?;
    if json {
        println!(
            "{}",
            serde_json::json!({ "ok": true, "avg": summary.average, "count": summary.count })
        );
    } else {
        println!(
            "{} now averages {:.1}/5 from {} user(s)",
            slug, summary.average, summary.count
        );
    }
    Ok(())
}

pub fn run_comment(catalog: &Catalog, slug: &str, user: &str, text: &str, json: bool) -> Result<()> {
    let comment = catalog.append_comment(slug, user, text)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&comment)?);
    } else {
        println!("Comment added to {} as {}", slug, comment.user);
    }
    Ok(())
}

pub fn run_request(catalog: &Catalog, title: &str, notes: &str, json: bool) -> Result<()> {
    let request = catalog.create_request(title, notes)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&request)?);
    } else {
        println!("Request queued: \"{}\" ({})", request.title, request.id);
    }
    Ok(())
}

pub fn run_requests(catalog: &Catalog, json: bool) -> Result<()> {
    let requests = catalog.list_requests()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&requests)?);
        return Ok(());
    }
    if requests.is_empty() {
        println!("No requests queued.");
        return Ok(());
    }
    for request in &requests {
        let status = serde_json::to_value(request.status)?;
        println!(
            "[{}] {}{}",
            status.as_str().unwrap_or("unknown"),
            request.title,
            if request.notes.is_empty() {
                String::new()
            } else {
                format!(" - {}", request.notes)
            }
        );
    }
    Ok(())
}
