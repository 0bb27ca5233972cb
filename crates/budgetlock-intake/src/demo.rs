//! Built-in demo dataset: a large error log, a controller, and a README.

use crate::sources::MemoryFile;

const KB: usize = 1024;

const LOG_LEVELS: [&str; 4] = ["INFO", "WARN", "ERROR", "DEBUG"];

const LOG_MESSAGES: [&str; 8] = [
    "GET /api/v1/session 200 in 41ms",
    "token refresh failed for user_id=8841: upstream timeout after 5000ms",
    "connection pool exhausted (max=20), queueing request",
    "POST /api/v1/login 401 invalid credentials",
    "retrying payment webhook delivery attempt=3 backoff=800ms",
    "cache miss for key session:8841, loading from postgres",
    "TypeError: Cannot read properties of undefined (reading 'claims')",
    "    at AuthController.verify (src/controllers/AuthController.ts:88:21)",
];

const CONTROLLER_LINES: [&str; 12] = [
    "import { Request, Response } from 'express';",
    "import { TokenService } from '../services/TokenService';",
    "",
    "export class AuthController {",
    "  constructor(private readonly tokens: TokenService) {}",
    "",
    "  async login(req: Request, res: Response): Promise<void> {",
    "    const { email, password } = req.body;",
    "    const session = await this.tokens.issue(email, password);",
    "    res.status(session ? 200 : 401).json(session ?? { error: 'invalid credentials' });",
    "  }",
    "}",
];

const README_LINES: [&str; 10] = [
    "# Auth Service",
    "",
    "Issues and verifies session tokens for the web client.",
    "",
    "## Running locally",
    "",
    "1. Copy `.env.example` to `.env` and fill in the database URL.",
    "2. Run `npm install` and then `npm run dev`.",
    "3. The service listens on port 4000 by default.",
    "",
];

/// The three demo uploads, each exactly its nominal size.
pub fn demo_dataset() -> Vec<MemoryFile> {
    vec![
        MemoryFile::new("server_error.log", server_log(450 * KB)),
        MemoryFile::new("AuthController.ts", fill_lines(&CONTROLLER_LINES, 12 * KB)),
        MemoryFile::new("README.md", fill_lines(&README_LINES, 5 * KB)),
    ]
}

fn server_log(size: usize) -> Vec<u8> {
    let mut out = String::with_capacity(size + 128);
    let mut n = 0usize;
    while out.len() < size {
        let line = format!(
            "2024-03-14T09:{:02}:{:02}.{:03}Z {:<5} [auth-service] req={:06} {}\n",
            (n / 60) % 60,
            n % 60,
            (n * 37) % 1000,
            LOG_LEVELS[n % LOG_LEVELS.len()],
            n,
            LOG_MESSAGES[n % LOG_MESSAGES.len()],
        );
        out.push_str(&line);
        n += 1;
    }
    truncate_to(out, size)
}

fn fill_lines(lines: &[&str], size: usize) -> Vec<u8> {
    let mut out = String::with_capacity(size + 128);
    for line in lines.iter().cycle() {
        if out.len() >= size {
            break;
        }
        out.push_str(line);
        out.push('\n');
    }
    truncate_to(out, size)
}

// All content is ASCII, so any byte offset is a char boundary.
fn truncate_to(mut text: String, size: usize) -> Vec<u8> {
    text.truncate(size);
    text.into_bytes()
}
