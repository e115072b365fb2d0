pub const BANNER: &str = r"
   (\/)  (\/)
    \/    \/     tool crab
   (o)__(o)      dig | mkpasswd | pwgen | uuidgen
  //|    |\\
";
