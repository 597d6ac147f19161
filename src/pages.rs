/// A one-time notice rendered on the index page.
pub struct Notice {
    pub category: &'static str,
    pub text: String,
}

/// Renders the index page: the URL form, any flashed notices and, when a
/// download just finished, a link to fetch the saved file.
pub fn index_page(notices: &[Notice], filename: Option<&str>) -> String {
    let mut page = String::from(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Video Downloader</title>\n\
         <style>\n\
         body { font-family: sans-serif; max-width: 40em; margin: 4em auto; }\n\
         input[type=text] { width: 70%; padding: 0.4em; }\n\
         .success { color: #2d7a2d; }\n\
         .error { color: #b03030; }\n\
         .info { color: #444444; }\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>Video Downloader</h1>\n",
    );

    if !notices.is_empty() {
        page.push_str("<ul class=\"messages\">\n");
        for notice in notices {
            page.push_str("<li class=\"");
            page.push_str(notice.category);
            page.push_str("\">");
            page.push_str(&escape_html(&notice.text));
            page.push_str("</li>\n");
        }
        page.push_str("</ul>\n");
    }

    page.push_str(
        "<form method=\"post\" action=\"/\">\n\
         <input type=\"text\" name=\"video_url\" placeholder=\"Video URL\" required>\n\
         <button type=\"submit\">Download</button>\n\
         </form>\n",
    );

    if let Some(name) = filename {
        let name = escape_html(name);
        page.push_str("<p><a href=\"/download/");
        page.push_str(&name);
        page.push_str("\">Download ");
        page.push_str(&name);
        page.push_str("</a></p>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
