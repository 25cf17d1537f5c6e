//! The built-in portfolio tree.

use crate::node::FsNode;

/// Project directories under `~/projects`: (directory, README body).
const PROJECTS: &[(&str, &str)] = &[
    (
        "qna-app",
        "# QnA App\n\n\
         A messaging platform that lets users ask questions anonymously.\n\
         Built with Next-Auth, Shadcn UI and the Vercel AI SDK.\n\n\
         Repo: https://github.com/Hetav21/QnA-app",
    ),
    (
        "clickify",
        "# Clickify\n\n\
         A URL shortener with an analytics dashboard.\n\
         Built with Vite + React, Node.js, Express and Prisma.\n\n\
         Repo: https://github.com/Hetav21/Clickify",
    ),
    (
        "classroom-desktop",
        "# Classroom Desktop\n\n\
         A desktop client for managing classroom activities, built on Electron.\n\n\
         Repo: https://github.com/Hetav21/classroom-desktop",
    ),
    (
        "nixos-config",
        "# NixOS Config\n\n\
         Personal NixOS configuration and dotfiles: a Hyprland rice and\n\
         declarative system management.\n\n\
         Repo: https://github.com/Hetav21/nixos",
    ),
    (
        "gentoo-dotfiles",
        "# Gentoo Dotfiles\n\n\
         Gentoo Linux system configuration, tuned for performance and minimalism.\n\n\
         Repo: https://github.com/Hetav21/dotfiles",
    ),
];

pub(crate) fn portfolio_tree() -> FsNode {
    let projects = PROJECTS
        .iter()
        .map(|(dir, readme)| FsNode::dir(*dir, vec![FsNode::file("README.md", *readme)]))
        .collect();

    FsNode::dir(
        "",
        vec![FsNode::dir(
            "home",
            vec![FsNode::dir(
                "hetav",
                vec![
                    FsNode::dir("projects", projects),
                    FsNode::dir(
                        "documents",
                        vec![FsNode::file(
                            "resume.txt",
                            "Hetav Shah\nAI Engineer\n\nSkills: TypeScript, Python, Nix, Docker",
                        )],
                    ),
                    FsNode::dir(
                        ".config",
                        vec![FsNode::file(
                            "about.txt",
                            "Name: Hetav Shah\nRole: AI Engineer\nGitHub: github.com/Hetav21",
                        )],
                    ),
                ],
            )],
        )],
    )
}
