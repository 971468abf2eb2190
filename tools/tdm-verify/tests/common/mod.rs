#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const BOT_MODULE: &str = r#"using System;
using InfServer.Bots;

namespace InfServer.Script.CTFBot
{
    class Script_CTF : Scripts.IScript
    {
        private Bot _bot;

        private enum WeaponType
        {
            AR,
            Shotgun,
            RifleGrenade
        }

        public bool init(IEventObject invoker)
        {
            _bot = invoker as Bot;
            Console.WriteLine("[CTF DEBUG] Bot initialised");
            return true;
        }

        public bool poll()
        {
            doCombatLogic();
            return true;
        }

        private void doCombatLogic()
        {
            Player target = getClosestPlayer();
            ChooseOptimalWeaponForDistance(target);
        }
    }
}
"#;

pub const GAME_MODE: &str = r#"using System.Collections.Generic;
using InfServer.Script.CTFBot;

namespace InfServer.Script.GameType_TDM
{
    class Script_TDM : Scripts.IScript
    {
        public List<Bot> _ctfBots = new List<Bot>();
        private const int BOT_SPAWN_MIN_INTERVAL = 5000;
        private const int BOT_SPAWN_MAX_INTERVAL = 15000;

        private enum BotSkillLevel
        {
            Weak,
            Average,
            Strong,
            Elite
        }

        public bool poll()
        {
            int now = Environment.TickCount;
            handleBotSpawning(now);
            manageBots(now);
            return true;
        }

        private void handleBotSpawning(int now)
        {
            Team team = getTeamWithFewestBots();
            int vehicle = getCTFBotVehicleType();
            var script = new InfServer.Script.CTFBot.Script_CTF();
        }

        private int getCTFBotVehicleType()
        {
            _alternate = !_alternate;
            return _alternate ? 301 : 129;
        }

        private void manageBots(int now)
        {
        }

        private Team getTeamWithFewestBots()
        {
            return null;
        }
    }
}
"#;

/// A scratch `CTF/` tree with `Bots/` and `CTF_TDM/` beneath it.
pub struct Layout {
    pub dir: tempfile::TempDir,
}

impl Layout {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("CTF/Bots")).unwrap();
        fs::create_dir_all(dir.path().join("CTF/CTF_TDM")).unwrap();
        Self { dir }
    }

    /// Both modules present and clean, plus the testing guide.
    pub fn healthy() -> Self {
        let layout = Self::new();
        layout.write_bot(BOT_MODULE);
        layout.write_game_mode(GAME_MODE);
        layout.write_guide();
        layout
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("CTF/CTF_TDM")
    }

    pub fn bot_path(&self) -> PathBuf {
        self.dir.path().join("CTF/Bots/CTFBot.cs")
    }

    pub fn game_mode_path(&self) -> PathBuf {
        self.root().join("TDM.cs")
    }

    pub fn write_bot(&self, content: &str) {
        write_file(&self.bot_path(), content);
    }

    pub fn write_game_mode(&self, content: &str) {
        write_file(&self.game_mode_path(), content);
    }

    pub fn write_guide(&self) {
        write_file(&self.root().join("TESTING_GUIDE.md"), "# Testing Guide\n");
    }
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
