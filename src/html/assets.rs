//! Inline assets embedded once per generated document.

/// Stylesheet for the publication list, including the hidden/visible class
/// pair the toggle script flips on the embedded BibTeX blocks.
pub(crate) const STYLE: &str = r#"
pre {
    white-space: pre-wrap;       /* Since CSS 2.1 */
    white-space: -moz-pre-wrap;  /* Mozilla, since 1999 */
    white-space: -pre-wrap;      /* Opera 4-6 */
    white-space: -o-pre-wrap;    /* Opera 7 */
    word-wrap: break-word;       /* Internet Explorer 5.5+ */
}

.publicationlist {
    margin: 0px;
}
.publicationlist tr {
    margin-top: 0.5em;
    margin-bottom: 1em;
}
.publicationlist .title {
    font-size: 1.0em;
}

.publicationlist .bibhidden {
    display: none;
}

.publicationlist .bibvisible {
    display: block;
}

.publicationlist tr {
    background-color: transparent;
    -webkit-transition: all 1s linear;
}

.publicationlist tr:target {
    background-color: #ffa;
    -webkit-transition: all 1s linear;
}

.publicationlist .footnotecomment {
    font-size: 0.8em;
    text-align: right;
}
"#;

/// Click handler for the per-entry "bibtex" toggle: walk up to the
/// enclosing table row, then flip the hidden/visible class pair on every
/// embedded `<pre>` block within it.
pub(crate) const SCRIPT: &str = r#"
function showBibHere(biblink) {
    var element = biblink;
    while (element.nodeName.toUpperCase() != 'TR') {
        element = element.parentNode;
    }
    var bibsources = element.getElementsByTagName('pre');
    for (var i = 0; i < bibsources.length; i++) {
        var pre = bibsources[i];
        if (pre.classList.contains("bibhidden")) {
            pre.classList.remove("bibhidden")
            pre.classList.add("bibvisible")
        } else {
            pre.classList.add("bibhidden")
            pre.classList.remove("bibvisible")
        }
    }
}
"#;
