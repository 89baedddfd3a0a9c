mod manga;
